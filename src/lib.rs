//! Ranking of alternative walking routes by accessibility.
//!
//! Each candidate route is searched on its own graph, scored from its
//! accessibility cost and ordered for display.

pub mod duration;
pub mod ranking;

pub use duration::format_duration;
pub use ranking::{RankedRoute, RouteCandidate, RouteRanking, evaluate_route, rank_routes};

pub use gradewise_core::prelude::*;
