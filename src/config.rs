//! Tunable constants of the scoring model.
//!
//! Every struct falls back to its defaults for missing fields when deserialized, so a partial
//! configuration only needs to name the values it overrides.

use serde::{Deserialize, Serialize};

/// The full configuration of a [`GraphStore`](crate::graph::GraphStore).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringWeights,
    pub centrality: CentralityWeights,
    pub resilience: ResilienceThresholds,
}

/// Weights used by the pairwise scores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Added to the interdisciplinary score when the two disciplines differ.
    pub discipline_bonus: f64,
    /// Multiplies the Jaccard similarity of the interests.
    pub interest_weight: f64,
    /// Multiplies the higher combined centrality of a gap-filling pair.
    pub centrality_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            discipline_bonus: 3.0,
            interest_weight: 2.0,
            centrality_bonus: 0.5,
        }
    }
}

/// Weights of the combined centrality score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentralityWeights {
    pub degree: f64,
    pub betweenness: f64,
}

impl Default for CentralityWeights {
    fn default() -> Self {
        Self {
            degree: 0.5,
            betweenness: 0.5,
        }
    }
}

/// Thresholds used to flag a removal as harmful.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResilienceThresholds {
    /// A removal losing more collaborations than this is critical.
    pub critical_edge_loss: usize,
}

impl Default for ResilienceThresholds {
    fn default() -> Self {
        Self {
            critical_edge_loss: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.scoring.discipline_bonus, 3.0);
        assert_eq!(config.scoring.interest_weight, 2.0);
        assert_eq!(config.scoring.centrality_bonus, 0.5);
        assert_eq!(config.centrality.degree, 0.5);
        assert_eq!(config.centrality.betweenness, 0.5);
        assert_eq!(config.resilience.critical_edge_loss, 3);
    }

    #[test]
    fn partial_deserialize() {
        let config: Config =
            serde_json::from_str(r#"{ "scoring": { "discipline_bonus": 1.5 } }"#).unwrap();

        assert_eq!(config.scoring.discipline_bonus, 1.5);
        assert_eq!(config.scoring.interest_weight, 2.0);
        assert_eq!(config.centrality, CentralityWeights::default());
        assert_eq!(config.resilience, ResilienceThresholds::default());
    }
}
