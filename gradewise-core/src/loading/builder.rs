use log::info;

use crate::{
    Error,
    model::{Edge, RoutingGraph, Segment},
};

/// Builds a routing graph from an ordered chain of segments
///
/// Every segment endpoint becomes a node, including sinks with no outgoing
/// edges, and every segment becomes one directed edge. Parallel edges are
/// kept. Continuity between consecutive segments is not checked.
///
/// # Errors
///
/// Returns [`Error::InvalidSegment`] for the first segment with a
/// non-finite coordinate or a negative or non-finite distance, duration or
/// accessibility cost
pub fn build_graph(segments: &[Segment]) -> Result<RoutingGraph, Error> {
    let mut graph = RoutingGraph::with_capacity(segments.len() + 1, segments.len());

    for (index, segment) in segments.iter().enumerate() {
        segment
            .check()
            .map_err(|reason| Error::InvalidSegment { index, reason })?;

        let from = graph.ensure_node(segment.start);
        let to = graph.ensure_node(segment.end);

        graph.add_edge(
            from,
            to,
            Edge {
                target: segment.end.node_id(),
                distance_meters: segment.distance_meters,
                duration_seconds: segment.duration_seconds,
                accessibility_cost: segment.accessibility_cost,
            },
        );
    }

    graph.build_spatial_index();

    info!(
        "Built routing graph with {} nodes and {} edges from {} segments",
        graph.node_count(),
        graph.edge_count(),
        segments.len()
    );

    Ok(graph)
}
