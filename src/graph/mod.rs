//! Graph representation consumed by the community evaluator

pub mod compressed;
pub mod builder;

pub use builder::GraphBuilder;
pub use compressed::CompressedGraph;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// One undirected edge of the edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint
    pub start: usize,

    /// Second endpoint
    pub end: usize,

    /// Non-negative integer weight
    pub weight: u32,
}

impl Edge {
    pub fn new(start: usize, end: usize, weight: u32) -> Self {
        Self { start, end, weight }
    }
}

/// Read-only access to an undirected weighted graph with nodes `0..node_count`.
///
/// `edges` yields every undirected edge once. `neighbors` yields one entry per
/// incident edge, so parallel edges repeat a neighbor and a self-loop yields
/// the node itself exactly once.
///
/// Every id yielded by `edges` or `neighbors` must be below `node_count`;
/// evaluators index membership flags with them.
pub trait GraphView {
    /// Number of nodes
    fn node_count(&self) -> usize;

    /// Every edge, each undirected edge exactly once
    fn edges(&self) -> impl Iterator<Item = Edge> + '_;

    /// Neighbor ids of `node`
    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_;
}

impl<N> GraphView for UnGraph<N, u32> {
    fn node_count(&self) -> usize {
        petgraph::graph::Graph::node_count(self)
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edge_references()
            .map(|e| Edge::new(e.source().index(), e.target().index(), *e.weight()))
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        petgraph::graph::Graph::neighbors(self, NodeIndex::new(node)).map(|n| n.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_petgraph_view() {
        let mut graph = UnGraph::<(), u32>::new_undirected();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        let _ = graph.add_edge(n0, n1, 4);
        let _ = graph.add_edge(n1, n2, 7);

        assert_eq!(GraphView::node_count(&graph), 3);

        let edges: Vec<Edge> = GraphView::edges(&graph).collect();
        assert_eq!(edges, vec![Edge::new(0, 1, 4), Edge::new(1, 2, 7)]);

        let mut around_1: Vec<usize> = GraphView::neighbors(&graph, 1).collect();
        around_1.sort_unstable();
        assert_eq!(around_1, vec![0, 2]);
    }
}
