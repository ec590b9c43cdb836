//! Pairwise scores of potential collaborations.
//!
//! The functions here are pure: they only read the two person records (and, for gap filling, a
//! centrality mapping) they're given.

use std::collections::BTreeSet;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    centrality::{self, CentralityMap},
    config::ScoringWeights,
    person::Person,
};

/// The score of a gap-filling collaboration and the shared interests motivating it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GapScore {
    pub score: f64,
    /// The shared interests, sorted and comma-joined.
    pub reason: String,
}

/// Computes the Jaccard similarity of two sets, 0 when both are empty.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use academe::scoring::jaccard;
///
/// let a: BTreeSet<String> = ["x", "y"].map(String::from).into();
/// let b: BTreeSet<String> = ["y", "z"].map(String::from).into();
///
/// assert_eq!(jaccard(&a, &b), 1.0 / 3.0);
/// assert_eq!(jaccard(&BTreeSet::new(), &BTreeSet::new()), 0.0);
/// ```
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();

    if union == 0 {
        return 0.0;
    }

    a.intersection(b).count() as f64 / union as f64
}

/// Scores a potential collaboration: a bonus when the disciplines differ plus the weighted
/// Jaccard similarity of the interests.
///
/// # Examples
///
/// ```
/// use academe::{config::ScoringWeights, person::Person, scoring::interdisciplinary_score};
///
/// let weights = ScoringWeights::default();
/// let a = Person::new("eng", ["x"]);
/// let b = Person::new("eng", ["y"]);
///
/// // Same discipline, disjoint interests.
/// assert_eq!(interdisciplinary_score(&a, &b, &weights), 0.0);
/// ```
pub fn interdisciplinary_score(first: &Person, second: &Person, weights: &ScoringWeights) -> f64 {
    let mut score = 0.0;

    if first.discipline() != second.discipline() {
        score += weights.discipline_bonus;
    }

    score + weights.interest_weight * jaccard(first.interests(), second.interests())
}

/// Scores a collaboration that would bridge a knowledge gap, `None` when the two people share no
/// interest.
///
/// The score is the share of common interests (relative to the larger interest set) plus a bonus
/// proportional to the higher combined centrality of the two; people without a centrality entry
/// count as 0.
pub fn gap_filling_score(
    (a, first): (&str, &Person),
    (b, second): (&str, &Person),
    centrality: &CentralityMap,
    weights: &ScoringWeights,
) -> Option<GapScore> {
    let common: Vec<&String> = first
        .interests()
        .intersection(second.interests())
        .collect();

    if common.is_empty() {
        return None;
    }

    // Can't be 0 as the sets intersect.
    let largest = first.interests().len().max(second.interests().len());
    let similarity = common.len() as f64 / largest as f64;

    let bonus = centrality::combined_score(centrality, a)
        .max(centrality::combined_score(centrality, b))
        * weights.centrality_bonus;

    Some(GapScore {
        score: similarity + bonus,
        // The interests are ordered sets, the intersection comes out sorted.
        reason: common.into_iter().join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centrality::NodeCentrality;

    const EPSILON: f64 = 1e-9;

    fn person(discipline: &str, interests: &[&str]) -> Person {
        Person::new(discipline, interests.iter().copied())
    }

    #[test]
    fn jaccard_bounds() {
        let cases = [
            (vec![], vec![]),
            (vec!["x"], vec![]),
            (vec!["x"], vec!["x"]),
            (vec!["x", "y"], vec!["y", "z", "w"]),
        ];

        for (a, b) in cases {
            let (a, b) = (person("eng", &a), person("eng", &b));
            let similarity = jaccard(a.interests(), b.interests());

            assert!((0.0..=1.0).contains(&similarity));
        }
    }

    #[test]
    fn interdisciplinary() {
        let weights = ScoringWeights::default();
        let a = person("eng", &["x", "y"]);
        let b = person("med", &["y", "z"]);

        let score = interdisciplinary_score(&a, &b, &weights);
        assert!((score - (3.0 + 2.0 / 3.0)).abs() < EPSILON);
    }

    #[test]
    fn interdisciplinary_symmetry() {
        let weights = ScoringWeights::default();
        let people = [
            person("eng", &["x", "y"]),
            person("med", &["y", "z"]),
            person("eng", &[]),
            person("adm", &["x"]),
        ];

        for a in &people {
            for b in &people {
                assert_eq!(
                    interdisciplinary_score(a, b, &weights),
                    interdisciplinary_score(b, a, &weights)
                );
            }
        }
    }

    #[test]
    fn interdisciplinary_no_interests() {
        let weights = ScoringWeights::default();

        assert_eq!(
            interdisciplinary_score(&person("eng", &[]), &person("med", &[]), &weights),
            3.0
        );
        assert_eq!(
            interdisciplinary_score(&person("eng", &[]), &person("eng", &[]), &weights),
            0.0
        );
    }

    #[test]
    fn interdisciplinary_interest_term_bounded() {
        let weights = ScoringWeights::default();
        let a = person("eng", &["x", "y"]);

        // Identical interests give the whole weight.
        assert_eq!(interdisciplinary_score(&a, &a, &weights), 2.0);
    }

    #[test]
    fn interdisciplinary_weights() {
        let weights = ScoringWeights {
            discipline_bonus: 1.0,
            interest_weight: 4.0,
            ..Default::default()
        };
        let a = person("eng", &["x"]);
        let b = person("med", &["x", "y"]);

        assert_eq!(interdisciplinary_score(&a, &b, &weights), 3.0);
    }

    #[test]
    fn gap_filling_no_overlap() {
        let weights = ScoringWeights::default();
        let a = person("eng", &["x"]);
        let b = person("eng", &["y"]);

        assert_eq!(
            gap_filling_score(("a", &a), ("b", &b), &CentralityMap::new(), &weights),
            None
        );
    }

    #[test]
    fn gap_filling_without_centrality() {
        let weights = ScoringWeights::default();
        let a = person("eng", &["z", "x", "y"]);
        let b = person("med", &["y", "z"]);

        let gap = gap_filling_score(("a", &a), ("b", &b), &CentralityMap::new(), &weights).unwrap();

        assert!((gap.score - 2.0 / 3.0).abs() < EPSILON);
        assert_eq!(gap.reason, "y, z");
    }

    #[test]
    fn gap_filling_with_centrality() {
        let weights = ScoringWeights::default();
        let a = person("eng", &["x"]);
        let b = person("med", &["x"]);

        let mut centrality = CentralityMap::new();
        centrality.insert(
            "b".into(),
            NodeCentrality {
                degree: 1.0,
                betweenness: 0.5,
                combined: 0.75,
            },
        );

        let gap = gap_filling_score(("a", &a), ("b", &b), &centrality, &weights).unwrap();

        assert!((gap.score - (1.0 + 0.75 * 0.5)).abs() < EPSILON);
        assert_eq!(gap.reason, "x");
    }

    #[test]
    fn gap_filling_symmetry() {
        let weights = ScoringWeights::default();
        let a = person("eng", &["x", "y"]);
        let b = person("med", &["x"]);

        assert_eq!(
            gap_filling_score(("a", &a), ("b", &b), &CentralityMap::new(), &weights),
            gap_filling_score(("b", &b), ("a", &a), &CentralityMap::new(), &weights)
        );
    }
}
