//! Ranked lists of collaborations to create and of the people leading the network.
//!
//! Candidates are the unordered pairs of active people that don't collaborate yet, enumerated in
//! insertion order: `(i, j)` with `i` inserted before `j`. Rankings sort by descending score and
//! are stable, equal scores keep that enumeration order.

use itertools::Itertools;
use serde::Serialize;
use tracing::trace;

use crate::{
    centrality::{self, NodeCentrality},
    graph::{ActiveSubgraph, GraphStore},
    person::Person,
    scoring,
};

/// A suggested interdisciplinary collaboration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recommendation {
    pub first: String,
    pub second: String,
    pub score: f64,
}

/// A suggested collaboration bridging a knowledge gap.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GapSuggestion {
    pub first: String,
    pub second: String,
    pub score: f64,
    /// The shared interests, sorted and comma-joined.
    pub reason: String,
}

/// A structurally influential person.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Leader {
    pub name: String,
    pub discipline: String,
    /// Number of active collaborations.
    pub connections: usize,
    pub centrality: NodeCentrality,
}

type Candidate<'a> = (&'a str, &'a Person);

/// Returns the `n` best scoring interdisciplinary collaborations between active people who don't
/// collaborate yet. Pairs scoring 0 aren't suggested.
///
/// # Examples
///
/// ```
/// use academe::graph::GraphStore;
///
/// let mut store = GraphStore::new();
/// store.upsert_person("a", "eng", ["x"]).unwrap();
/// store.upsert_person("b", "med", ["x"]).unwrap();
/// store.upsert_person("c", "eng", ["y"]).unwrap();
///
/// let recommendations = store.top_interdisciplinary(5);
///
/// assert_eq!(recommendations.len(), 2);
/// assert_eq!((recommendations[0].first.as_str(), recommendations[0].second.as_str()), ("a", "b"));
/// assert_eq!(recommendations[0].score, 5.0);
/// ```
pub fn top_interdisciplinary(store: &GraphStore, n: usize) -> Vec<Recommendation> {
    let subgraph = store.active_subgraph();
    let weights = &store.config().scoring;

    let mut recommendations: Vec<Recommendation> = candidate_pairs(&subgraph)
        .filter_map(|((a, first), (b, second))| {
            let score = scoring::interdisciplinary_score(first, second, weights);

            (score > 0.0).then(|| Recommendation {
                first: a.to_owned(),
                second: b.to_owned(),
                score,
            })
        })
        .collect();

    trace!(candidates = recommendations.len(), "ranking interdisciplinary pairs");

    // Stable, ties keep the enumeration order.
    recommendations.sort_by(|x, y| y.score.total_cmp(&x.score));
    recommendations.truncate(n);

    recommendations
}

/// Returns the `n` best scoring gap-filling collaborations between active people who don't
/// collaborate yet. Pairs without a shared interest aren't suggested.
pub fn top_gap_filling(store: &GraphStore, n: usize) -> Vec<GapSuggestion> {
    let subgraph = store.active_subgraph();
    let config = store.config();
    let centrality = centrality::analyze(&subgraph, &config.centrality);

    let mut suggestions: Vec<GapSuggestion> = candidate_pairs(&subgraph)
        .filter_map(|((a, first), (b, second))| {
            let gap = scoring::gap_filling_score(
                (a, first),
                (b, second),
                &centrality,
                &config.scoring,
            )?;

            Some(GapSuggestion {
                first: a.to_owned(),
                second: b.to_owned(),
                score: gap.score,
                reason: gap.reason,
            })
        })
        .collect();

    trace!(candidates = suggestions.len(), "ranking gap-filling pairs");

    suggestions.sort_by(|x, y| y.score.total_cmp(&x.score));
    suggestions.truncate(n);

    suggestions
}

/// Returns the `n` active people with the highest degree centrality, ties in insertion order.
/// Empty when the active network has no collaborations.
pub fn top_leaders(store: &GraphStore, n: usize) -> Vec<Leader> {
    let subgraph = store.active_subgraph();
    let centrality = centrality::analyze(&subgraph, &store.config().centrality);
    let neighbours = subgraph.adjacency_list();

    let mut leaders: Vec<Leader> = subgraph
        .people()
        .zip(neighbours)
        .filter_map(|((name, person), neighbours)| {
            let centrality = *centrality.get(name)?;

            Some(Leader {
                name: name.to_owned(),
                discipline: person.discipline().to_owned(),
                connections: neighbours.len(),
                centrality,
            })
        })
        .collect();

    leaders.sort_by(|x, y| y.centrality.degree.total_cmp(&x.centrality.degree));
    leaders.truncate(n);

    leaders
}

/// Enumerates the pairs of active people that don't collaborate.
fn candidate_pairs<'s, 'a>(
    subgraph: &'s ActiveSubgraph<'a>,
) -> impl Iterator<Item = (Candidate<'a>, Candidate<'a>)> + 's {
    let adjacency_matrix = subgraph.adjacency_matrix();

    subgraph
        .people()
        .enumerate()
        .tuple_combinations()
        .filter(move |((i, _), (j, _))| adjacency_matrix[(*i, *j)] == 0.0)
        .map(|((_, a), (_, b))| (a, b))
}
