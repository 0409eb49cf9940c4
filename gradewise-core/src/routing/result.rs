use serde::{Deserialize, Serialize};

use crate::{Meters, config::ScoreConfig, model::Coordinate};

/// Path found by a successful search together with its aggregate metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Node coordinates from start to end, at least one element
    pub path: Vec<Coordinate>,
    pub total_time_minutes: f64,
    /// Sum of the raw, unweighted accessibility costs of the traversed edges
    pub total_accessible_cost: f64,
    pub total_distance_meters: Meters,
}

impl SearchResult {
    pub fn start(&self) -> Option<&Coordinate> {
        self.path.first()
    }

    pub fn end(&self) -> Option<&Coordinate> {
        self.path.last()
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn suitability_score(&self, config: &ScoreConfig) -> f64 {
        config.normalize(self.total_accessible_cost)
    }
}
