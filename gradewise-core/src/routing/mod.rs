//! Weighted A* search over a routing graph

mod astar;
mod heuristic;
mod result;
mod state;
mod to_geojson;

pub use astar::{search_between, search_path};
pub use heuristic::Heuristic;
pub use result::SearchResult;
