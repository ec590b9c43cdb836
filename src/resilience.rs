//! Resilience of the network to the loss of a single person.

use serde::Serialize;
use tracing::info;

use crate::{
    error::{NetworkError, NetworkResult},
    graph::{GraphStore, NetworkMetrics},
};

/// The impact of removing a person from the active network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResilienceReport {
    /// The removed person.
    pub removed: String,
    pub before: NetworkMetrics,
    pub after: NetworkMetrics,
    /// Components gained by the removal, negative when an isolated person disappears.
    pub component_delta: isize,
    /// Collaborations lost by the removal.
    pub edge_delta: usize,
    /// Above this many lost collaborations the removal is critical.
    critical_edge_loss: usize,
}

impl ResilienceReport {
    /// Returns whether the removal split the network into more components.
    pub fn is_fragmented(&self) -> bool {
        self.component_delta > 0
    }

    /// Returns whether the removal lost more collaborations than the configured threshold.
    pub fn is_critical(&self) -> bool {
        self.edge_delta > self.critical_edge_loss
    }
}

/// Removes a person from the active network and measures the network before and after.
///
/// The removal stays in effect, the caller undoes it with [`GraphStore::restore`] or
/// [`GraphStore::reset_all`].
///
/// # Examples
///
/// ```
/// use academe::graph::GraphStore;
///
/// let mut store = GraphStore::new();
/// for name in ["a", "b", "c"] {
///     store.upsert_person(name, "eng", ["x"]).unwrap();
/// }
/// store.add_collaboration("a", "b").unwrap();
/// store.add_collaboration("b", "c").unwrap();
///
/// let report = store.simulate_removal("b").unwrap();
/// assert_eq!(report.component_delta, 1);
/// assert_eq!(report.edge_delta, 2);
/// assert!(report.is_fragmented());
/// assert!(store.is_removed("b"));
/// ```
pub fn simulate_removal(store: &mut GraphStore, name: &str) -> NetworkResult<ResilienceReport> {
    let name = name.trim();

    if store.person(name).is_none() {
        return Err(NetworkError::PersonNotFound(name.to_owned()));
    }

    if store.is_removed(name) {
        return Err(NetworkError::AlreadyRemoved(name.to_owned()));
    }

    let before = store.active_subgraph().metrics();
    store.set_removed(name, true);
    let after = store.active_subgraph().metrics();

    let report = ResilienceReport {
        removed: name.to_owned(),
        before,
        after,
        component_delta: after.component_count as isize - before.component_count as isize,
        edge_delta: before.edge_count - after.edge_count,
        critical_edge_loss: store.config().resilience.critical_edge_loss,
    };

    info!(
        name,
        component_delta = report.component_delta,
        edge_delta = report.edge_delta,
        "removal simulated"
    );

    Ok(report)
}
