use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::graph::{EdgeIndex, NodeIndex};

/// Open set entry
#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) estimate: f64,
    /// Position of the node in the open set, smaller was admitted first
    pub(super) order: u64,
    pub(super) node: NodeIndex,
}

// Min-heap by estimate, then by admission order
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Bookkeeping owned by a single search invocation.
///
/// A node already in the open set keeps its admission order when its
/// estimate improves; superseded heap entries are skipped on pop.
#[derive(Debug, Default)]
pub(super) struct SearchState {
    g_score: HashMap<NodeIndex, f64>,
    f_score: HashMap<NodeIndex, f64>,
    came_from: HashMap<NodeIndex, (NodeIndex, EdgeIndex)>,
    heap: BinaryHeap<State>,
    open: HashMap<NodeIndex, u64>,
    next_order: u64,
}

impl SearchState {
    pub(super) fn new(start: NodeIndex, estimate: f64) -> Self {
        let mut state = Self::default();
        state.g_score.insert(start, 0.0);
        state.admit(start, estimate);
        state
    }

    pub(super) fn g_score(&self, node: NodeIndex) -> f64 {
        self.g_score.get(&node).copied().unwrap_or(f64::INFINITY)
    }

    pub(super) fn predecessor(&self, node: NodeIndex) -> Option<(NodeIndex, EdgeIndex)> {
        self.came_from.get(&node).copied()
    }

    /// Records a cheaper way to reach `node` and (re)admits it to the open set
    pub(super) fn relax(
        &mut self,
        node: NodeIndex,
        via: (NodeIndex, EdgeIndex),
        g_score: f64,
        estimate: f64,
    ) {
        self.came_from.insert(node, via);
        self.g_score.insert(node, g_score);
        self.admit(node, estimate);
    }

    fn admit(&mut self, node: NodeIndex, estimate: f64) {
        self.f_score.insert(node, estimate);
        let order = *self.open.entry(node).or_insert_with(|| {
            let order = self.next_order;
            self.next_order += 1;
            order
        });
        self.heap.push(State {
            estimate,
            order,
            node,
        });
    }

    /// Removes the open node with the lowest estimate
    pub(super) fn pop(&mut self) -> Option<NodeIndex> {
        while let Some(State {
            estimate,
            order,
            node,
        }) = self.heap.pop()
        {
            let current = self.open.get(&node) == Some(&order)
                && self.f_score.get(&node).copied() == Some(estimate);
            if current {
                self.open.remove(&node);
                return Some(node);
            }
        }
        None
    }

    pub(super) fn open_len(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_estimate_first() {
        let mut state = SearchState::new(NodeIndex::new(0), 5.0);
        state.relax(NodeIndex::new(1), (NodeIndex::new(0), EdgeIndex::new(0)), 1.0, 3.0);
        state.relax(NodeIndex::new(2), (NodeIndex::new(0), EdgeIndex::new(1)), 1.0, 4.0);

        assert_eq!(state.pop(), Some(NodeIndex::new(1)));
        assert_eq!(state.pop(), Some(NodeIndex::new(2)));
        assert_eq!(state.pop(), Some(NodeIndex::new(0)));
        assert_eq!(state.pop(), None);
    }

    #[test]
    fn test_ties_go_to_first_admitted() {
        let mut state = SearchState::new(NodeIndex::new(0), 9.0);
        state.relax(NodeIndex::new(2), (NodeIndex::new(0), EdgeIndex::new(0)), 1.0, 4.0);
        state.relax(NodeIndex::new(1), (NodeIndex::new(0), EdgeIndex::new(1)), 1.0, 4.0);

        assert_eq!(state.pop(), Some(NodeIndex::new(2)));
        assert_eq!(state.pop(), Some(NodeIndex::new(1)));
    }

    #[test]
    fn test_improved_node_keeps_its_place() {
        let mut state = SearchState::new(NodeIndex::new(0), 9.0);
        let via = (NodeIndex::new(0), EdgeIndex::new(0));
        state.relax(NodeIndex::new(1), via, 5.0, 8.0);
        state.relax(NodeIndex::new(2), via, 4.0, 6.0);
        // node 1 improves to tie with node 2 and wins on admission order
        state.relax(NodeIndex::new(1), via, 3.0, 6.0);

        assert_eq!(state.open_len(), 3);
        assert_eq!(state.pop(), Some(NodeIndex::new(1)));
        assert_eq!(state.pop(), Some(NodeIndex::new(2)));
        assert_eq!(state.pop(), Some(NodeIndex::new(0)));
        // the superseded entry for node 1 is discarded
        assert_eq!(state.pop(), None);
        assert_eq!(state.g_score(NodeIndex::new(1)), 3.0);
        assert_eq!(state.g_score(NodeIndex::new(7)), f64::INFINITY);
    }
}
