//! Routing graph - nodes keyed by canonical coordinate, directed edges
//! carrying distance, duration and accessibility cost

use hashbrown::{HashMap, hash_map::Entry};
use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use rstar::{RTree, primitives::GeomWithData};
use serde::{Deserialize, Serialize};

use super::{Coordinate, NodeId};
use crate::{Meters, Seconds, config::CostWeights};

/// Spatial index entry: `[lng, lat]` position and the node it belongs to
pub(crate) type IndexedNode = GeomWithData<[f64; 2], NodeIndex>;

/// Routing graph node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Position of the first segment endpoint that produced this node
    pub coords: Coordinate,
}

/// Directed edge, owned by its source node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub target: NodeId,
    pub distance_meters: Meters,
    pub duration_seconds: Seconds,
    pub accessibility_cost: f64,
}

impl Edge {
    /// Search weight of the edge: weighted accessibility cost plus weighted travel time
    pub fn composite_cost(&self, weights: &CostWeights) -> f64 {
        self.accessibility_cost * weights.accessibility + self.duration_seconds * weights.time
    }
}

/// Graph built for a single search request
#[derive(Debug, Clone, Default)]
pub struct RoutingGraph {
    pub(crate) graph: DiGraph<Node, Edge>,
    pub(crate) index: HashMap<NodeId, NodeIndex>,
    pub(crate) rtree: RTree<IndexedNode>,
}

impl RoutingGraph {
    pub(crate) fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            index: HashMap::with_capacity(nodes),
            rtree: RTree::new(),
        }
    }

    /// Returns the node for the coordinate's key, creating it on first
    /// encounter. Later coordinates with the same key do not move the node.
    pub(crate) fn ensure_node(&mut self, coords: Coordinate) -> NodeIndex {
        let id = coords.node_id();
        match self.index.entry(id) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let node = self.graph.add_node(Node { id, coords });
                entry.insert(node);
                node
            }
        }
    }

    pub(crate) fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, edge: Edge) {
        self.graph.add_edge(from, to, edge);
    }

    pub(crate) fn build_spatial_index(&mut self) {
        let points = self
            .graph
            .node_indices()
            .map(|node| {
                let coords = self.graph[node].coords;
                IndexedNode::new([coords.lng, coords.lat], node)
            })
            .collect();
        self.rtree = RTree::bulk_load(points);
    }

    pub(crate) fn index_of(&self, id: &NodeId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Outgoing edges of a node in the order they were added.
    /// petgraph walks a node's edge list newest first.
    pub(crate) fn outgoing(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = EdgeReference<'_, Edge>> {
        let edges: Vec<_> = self.graph.edges(node).collect();
        edges.into_iter().rev()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index_of(id).map(|node| &self.graph[node])
    }

    /// All nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Outgoing edges of `id` in the order they were added, empty for
    /// unknown ids and sinks
    pub fn edges(&self, id: &NodeId) -> Vec<&Edge> {
        self.index_of(id)
            .map(|node| {
                self.outgoing(node)
                    .map(|edge| edge.weight())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Node closest to an arbitrary coordinate, measured in degree space
    pub fn nearest_node(&self, coordinate: &Coordinate) -> Option<NodeId> {
        self.rtree
            .nearest_neighbor(&[coordinate.lng, coordinate.lat])
            .map(|entry| self.graph[entry.data].id)
    }
}
