use log::{debug, trace, warn};
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::{SearchResult, state::SearchState};
use crate::{
    Error,
    config::SearchConfig,
    model::{Coordinate, NodeId, RoutingGraph},
};

/// Weighted A* search between two nodes of the graph.
///
/// Edges are weighed by `accessibility_cost * weights.accessibility +
/// duration_seconds * weights.time`. With the default scaled Euclidean
/// heuristic the result is a best-effort path; use [`super::Heuristic::Zero`]
/// for the cheapest one.
///
/// Returns `Ok(None)` if either endpoint is missing from the graph, the
/// open set runs dry before reaching `end`, or `max_iterations` expansions
/// pass without reaching it.
///
/// # Errors
///
/// Returns an error if the configuration is invalid
pub fn search_path(
    graph: &RoutingGraph,
    start: &NodeId,
    end: &NodeId,
    config: &SearchConfig,
) -> Result<Option<SearchResult>, Error> {
    config.validate()?;

    let (Some(start_node), Some(end_node)) = (graph.index_of(start), graph.index_of(end)) else {
        debug!("Endpoint {start} or {end} is not in the graph, no path");
        return Ok(None);
    };

    let goal = graph.graph[end_node].coords;
    let estimate = |node: NodeIndex| config.heuristic.estimate(graph.graph[node].coords, goal);

    let mut state = SearchState::new(start_node, estimate(start_node));
    let mut expanded = 0_usize;

    while let Some(current) = state.pop() {
        if current == end_node {
            debug!("Reached {end} from {start} after {expanded} expansions");
            return Ok(Some(reconstruct_path(graph, &state, start_node, end_node)));
        }

        if config.max_iterations.is_some_and(|limit| expanded >= limit) {
            warn!(
                "Search from {start} to {end} stopped after {expanded} expansions \
                with {} nodes still open",
                state.open_len()
            );
            return Ok(None);
        }
        expanded += 1;

        let current_g = state.g_score(current);
        trace!("Expanding {} at cost {current_g}", graph.graph[current].id);

        for edge in graph.outgoing(current) {
            let next = edge.target();
            let tentative = current_g + edge.weight().composite_cost(&config.weights);

            if tentative < state.g_score(next) {
                state.relax(next, (current, edge.id()), tentative, tentative + estimate(next));
            }
        }
    }

    debug!("No path from {start} to {end}, open set exhausted after {expanded} expansions");
    Ok(None)
}

/// Snaps both coordinates to their nearest graph nodes and searches between them
///
/// # Errors
///
/// Returns an error if the configuration is invalid
pub fn search_between(
    graph: &RoutingGraph,
    from: &Coordinate,
    to: &Coordinate,
    config: &SearchConfig,
) -> Result<Option<SearchResult>, Error> {
    let (Some(start), Some(end)) = (graph.nearest_node(from), graph.nearest_node(to)) else {
        debug!("Graph is empty, nothing to snap {from:?} and {to:?} to");
        return Ok(None);
    };
    search_path(graph, &start, &end, config)
}

/// Walks the predecessor chain back from `end`, summing the metrics of the
/// edges the search actually took.
fn reconstruct_path(
    graph: &RoutingGraph,
    state: &SearchState,
    start: NodeIndex,
    end: NodeIndex,
) -> SearchResult {
    let mut path = vec![graph.graph[end].coords];
    let mut total_seconds = 0.0;
    let mut total_accessible_cost = 0.0;
    let mut total_distance_meters = 0.0;

    let mut current = end;
    while current != start {
        let Some((prev, edge)) = state.predecessor(current) else {
            break;
        };
        let edge = &graph.graph[edge];
        total_seconds += edge.duration_seconds;
        total_accessible_cost += edge.accessibility_cost;
        total_distance_meters += edge.distance_meters;

        path.push(graph.graph[prev].coords);
        current = prev;
    }
    path.reverse();

    SearchResult {
        path,
        total_time_minutes: total_seconds / 60.0,
        total_accessible_cost,
        total_distance_meters,
    }
}
