//! Accessibility-weighted walking route search.
//!
//! Builds a routable graph from path segments, prices each segment by the
//! climbing effort and steepness of its elevation profile, and runs a
//! weighted A* search that blends travel time with that accessibility cost.

pub mod config;
pub mod cost;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod score;

pub use config::{CostWeights, ScoreConfig, SearchConfig};
pub use cost::{CostBreakdown, accessibility_cost};
pub use error::Error;
pub use loading::build_graph;
pub use model::{Coordinate, Edge, ElevationSample, Node, NodeId, RoutingGraph, Segment};
pub use routing::{Heuristic, SearchResult, search_between, search_path};
pub use score::normalize_score;

/// Travel time in seconds
pub type Seconds = f64;
/// Distance in meters
pub type Meters = f64;

/// Fixed-point scale for node identity: six fractional digits, roughly 0.1 m
pub const COORDINATE_SCALE: f64 = 1_000_000.0;
