// Re-export key components
pub use crate::config::{CostWeights, ScoreConfig, SearchConfig};
pub use crate::cost::{CostBreakdown, accessibility_cost};
pub use crate::loading::build_graph;
pub use crate::model::{Coordinate, Edge, ElevationSample, Node, NodeId, RoutingGraph, Segment};
pub use crate::routing::{Heuristic, SearchResult, search_between, search_path};
pub use crate::score::normalize_score;

pub use crate::Error;

// Units
pub use crate::Meters;
pub use crate::Seconds;
