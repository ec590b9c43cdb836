//! Degree and betweenness centrality of the active network.

use std::collections::HashMap;

use serde::Serialize;
use tracing::trace;

use crate::{betweenness::compute_betweenness, config::CentralityWeights, graph::ActiveSubgraph};

/// The centrality measurements of a single person.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct NodeCentrality {
    /// Connections normalized by the `n - 1` possible ones.
    pub degree: f64,
    /// Normalized share of the shortest paths between other pairs running through the person.
    pub betweenness: f64,
    /// Weighted sum of the degree and betweenness.
    pub combined: f64,
}

/// A mapping of names to their centrality.
pub type CentralityMap = HashMap<String, NodeCentrality>;

/// Computes the centrality of every person of the active network.
///
/// Returns an empty mapping if the network has no collaborations, there is nothing to measure.
///
/// # Examples
///
/// ```
/// use academe::{centrality, config::CentralityWeights, graph::GraphStore};
///
/// let mut store = GraphStore::new();
/// for name in ["a", "b", "c"] {
///     store.upsert_person(name, "eng", ["x"]).unwrap();
/// }
/// assert!(centrality::analyze(&store.active_subgraph(), &CentralityWeights::default()).is_empty());
///
/// store.add_collaboration("a", "b").unwrap();
/// store.add_collaboration("b", "c").unwrap();
///
/// let centrality = centrality::analyze(&store.active_subgraph(), &CentralityWeights::default());
/// assert_eq!(centrality["b"].degree, 1.0);
/// assert_eq!(centrality["b"].betweenness, 1.0);
/// assert_eq!(centrality["a"].betweenness, 0.0);
/// ```
pub fn analyze(subgraph: &ActiveSubgraph<'_>, weights: &CentralityWeights) -> CentralityMap {
    let n = subgraph.node_count();

    if n == 0 || subgraph.edge_count() == 0 {
        return CentralityMap::new();
    }

    trace!(nodes = n, edges = subgraph.edge_count(), "computing centrality");

    let connections = subgraph.degree_matrix().diagonal();
    let betweenness = compute_betweenness(&subgraph.adjacency_list());

    // A collaboration implies at least two people, the guard keeps the division defined.
    let possible_connections = if n > 1 { (n - 1) as f64 } else { 0.0 };

    subgraph
        .people()
        .zip(connections.iter().zip(betweenness))
        .map(|((name, _), (&connections, betweenness))| {
            let degree = if possible_connections > 0.0 {
                connections / possible_connections
            } else {
                0.0
            };

            let centrality = NodeCentrality {
                degree,
                betweenness,
                combined: weights.degree * degree + weights.betweenness * betweenness,
            };

            (name.to_owned(), centrality)
        })
        .collect()
}

/// Looks up the combined centrality of a person, 0 if it has no entry.
///
/// # Examples
///
/// ```
/// use academe::centrality::{combined_score, CentralityMap};
///
/// assert_eq!(combined_score(&CentralityMap::new(), "a"), 0.0);
/// ```
pub fn combined_score(centrality: &CentralityMap, name: &str) -> f64 {
    centrality
        .get(name)
        .map(|node| node.combined)
        .unwrap_or_default()
}
