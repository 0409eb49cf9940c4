use std::cmp::Ordering;

use gradewise_core::prelude::*;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::duration::format_duration;

/// One alternative route to evaluate: an ordered chain of segments from the
/// route's origin to its destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub label: String,
    pub segments: Vec<Segment>,
}

impl RouteCandidate {
    pub fn new(label: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            label: label.into(),
            segments,
        }
    }
}

/// Evaluated route, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRoute {
    pub label: String,
    /// Suitability score rounded to one decimal place
    pub score: f64,
    pub duration_text: String,
    pub result: SearchResult,
}

/// Outcome of ranking a set of candidates
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteRanking {
    /// Best first
    pub ranked: Vec<RankedRoute>,
    /// Labels of candidates without a path between their endpoints
    pub unreachable: Vec<String>,
}

impl RouteRanking {
    pub fn best(&self) -> Option<&RankedRoute> {
        self.ranked.first()
    }
}

/// Searches a single candidate on its own graph, from the start of its first
/// segment to the end of its last one.
///
/// Returns `Ok(None)` for a candidate with no segments or no path.
///
/// # Errors
///
/// Returns an error if a segment is invalid or the search configuration is
/// invalid
pub fn evaluate_route(
    candidate: &RouteCandidate,
    search: &SearchConfig,
    score: &ScoreConfig,
) -> Result<Option<RankedRoute>, Error> {
    let (Some(first), Some(last)) = (candidate.segments.first(), candidate.segments.last()) else {
        warn!("Route candidate '{}' has no segments", candidate.label);
        return Ok(None);
    };

    let graph = build_graph(&candidate.segments)?;
    let result = search_path(&graph, &first.start.node_id(), &last.end.node_id(), search)?;

    Ok(result.map(|result| {
        let score = round_score(result.suitability_score(score));
        debug!(
            "Route '{}': score {score}, {:.1} min, accessibility cost {:.1}",
            candidate.label, result.total_time_minutes, result.total_accessible_cost
        );
        RankedRoute {
            label: candidate.label.clone(),
            score,
            duration_text: format_duration(result.total_time_minutes),
            result,
        }
    }))
}

/// Evaluates every candidate independently and in parallel, then orders the
/// reachable ones by score (highest first), then travel time (shortest
/// first), then input order.
///
/// # Errors
///
/// Returns the first error in input order if any candidate has an invalid
/// segment, or if either configuration is invalid
pub fn rank_routes(
    candidates: &[RouteCandidate],
    search: &SearchConfig,
    score: &ScoreConfig,
) -> Result<RouteRanking, Error> {
    search.validate()?;
    score.validate()?;

    let evaluated = candidates
        .par_iter()
        .map(|candidate| evaluate_route(candidate, search, score))
        .collect::<Result<Vec<_>, _>>()?;

    let mut ranking = RouteRanking::default();
    for (candidate, route) in candidates.iter().zip(evaluated) {
        match route {
            Some(route) => ranking.ranked.push(route),
            None => ranking.unreachable.push(candidate.label.clone()),
        }
    }

    // stable sort keeps input order for ties
    ranking.ranked.sort_by(compare_routes);

    info!(
        "Ranked {} of {} route candidates ({} unreachable)",
        ranking.ranked.len(),
        candidates.len(),
        ranking.unreachable.len()
    );

    Ok(ranking)
}

fn compare_routes(a: &RankedRoute, b: &RankedRoute) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| {
        a.result
            .total_time_minutes
            .total_cmp(&b.result.total_time_minutes)
    })
}

fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
