//! Construction of routing graphs from ordered path segments.

mod builder;

pub use builder::build_graph;
