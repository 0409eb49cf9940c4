use geo::{Distance, Euclidean, Point};
use serde::{Deserialize, Serialize};

use crate::{Error, model::Coordinate};

/// Remaining-cost estimate used to order the open set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Heuristic {
    /// Straight-line distance in degree space times `scale`.
    ///
    /// Not a lower bound of the composite cost, so the returned path is
    /// not guaranteed to be the cheapest one.
    ScaledEuclidean {
        #[serde(default = "default_scale")]
        scale: f64,
    },
    /// No estimate; the search degrades to weighted Dijkstra and returns
    /// the cheapest path.
    Zero,
}

fn default_scale() -> f64 {
    10_000.0
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::ScaledEuclidean {
            scale: default_scale(),
        }
    }
}

impl Heuristic {
    pub fn estimate(&self, from: Coordinate, goal: Coordinate) -> f64 {
        match self {
            Heuristic::ScaledEuclidean { scale } => {
                Euclidean.distance(Point::from(from), Point::from(goal)) * scale
            }
            Heuristic::Zero => 0.0,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        match self {
            Heuristic::ScaledEuclidean { scale } if !scale.is_finite() || *scale < 0.0 => Err(
                Error::InvalidConfig(format!(
                    "heuristic scale must be finite and non-negative, got {scale}"
                )),
            ),
            _ => Ok(()),
        }
    }
}
