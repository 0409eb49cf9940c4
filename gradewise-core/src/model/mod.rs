//! Data model for accessibility-weighted routing
//!
//! Contains coordinates and their canonical node keys, the segments a
//! routing graph is built from, and the graph itself.

pub mod coordinate;
pub mod graph;
pub mod segment;

pub use coordinate::{Coordinate, NodeId};
pub use graph::{Edge, Node, RoutingGraph};
pub use segment::{ElevationSample, Segment};
