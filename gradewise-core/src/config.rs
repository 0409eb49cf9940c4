//! Configuration types for search and scoring.
//!
//! All types deserialize from partial documents: missing fields take their
//! defaults.

use serde::{Deserialize, Serialize};

use crate::{Error, routing::Heuristic, score::DEFAULT_MAX_COST, score::normalize_score};

/// Relative weights of the two terms of the composite edge cost.
///
/// The default lets accessibility dominate: one unit of accessibility cost
/// outweighs fifty seconds of walking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostWeights {
    pub accessibility: f64,
    pub time: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            accessibility: 50.0,
            time: 1.0,
        }
    }
}

impl CostWeights {
    pub fn new(accessibility: f64, time: f64) -> Self {
        Self {
            accessibility,
            time,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [("accessibility", self.accessibility), ("time", self.time)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} weight must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub weights: CostWeights,
    pub heuristic: Heuristic,
    /// Upper bound on node expansions. A search that hits it reports no path.
    pub max_iterations: Option<usize>,
}

impl SearchConfig {
    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Parses and validates a JSON configuration document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or describes an invalid configuration
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.weights.validate()?;
        self.heuristic.validate()
    }
}

/// Score normalization parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Cost mapped to a score of zero
    pub max_cost: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            max_cost: DEFAULT_MAX_COST,
        }
    }
}

impl ScoreConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_cost.is_finite() && self.max_cost > 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidConfig(format!(
                "max_cost must be finite and positive, got {}",
                self.max_cost
            )))
        }
    }

    pub fn normalize(&self, cost: f64) -> f64 {
        normalize_score(cost, self.max_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();

        assert_eq!(config.weights.accessibility, 50.0);
        assert_eq!(config.weights.time, 1.0);
        assert_eq!(config.heuristic, Heuristic::ScaledEuclidean { scale: 10_000.0 });
        assert_eq!(config.max_iterations, None);
        assert_eq!(ScoreConfig::default().max_cost, 1000.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SearchConfig::from_json(r#"{ "weights": { "accessibility": 10.0 } }"#)
            .expect("valid config");

        assert_eq!(config.weights, CostWeights::new(10.0, 1.0));
        assert_eq!(config.heuristic, Heuristic::default());
    }

    #[test]
    fn test_json_heuristic_and_budget() {
        let config = SearchConfig::from_json(
            r#"{ "heuristic": { "kind": "zero" }, "max_iterations": 500 }"#,
        )
        .expect("valid config");

        assert_eq!(config.heuristic, Heuristic::Zero);
        assert_eq!(config.max_iterations, Some(500));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let result = SearchConfig::from_json(r#"{ "weights": { "time": -1.0 } }"#);

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            SearchConfig::from_json("{ weights: "),
            Err(Error::SerializationError(_))
        ));
    }

    #[test]
    fn test_score_config_validation() {
        assert!(ScoreConfig::default().validate().is_ok());
        assert!(ScoreConfig { max_cost: 0.0 }.validate().is_err());
        assert!(ScoreConfig { max_cost: f64::NAN }.validate().is_err());
        assert_eq!(ScoreConfig { max_cost: 200.0 }.normalize(50.0), 75.0);
    }
}
