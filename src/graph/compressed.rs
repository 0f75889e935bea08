//! Memory-efficient undirected graph representation

use std::mem;
use crate::graph::{Edge, GraphView};

/// Compressed sparse representation of an undirected weighted graph.
///
/// Every edge is stored once in `edge_list` and once per endpoint in the
/// adjacency arrays (a self-loop appears once in its node's adjacency).
/// Only [`GraphBuilder`](crate::graph::GraphBuilder) creates one, so every
/// stored endpoint is a node id below `node_count`.
#[derive(Debug, Clone)]
pub struct CompressedGraph {
    /// Number of nodes in the graph
    pub(crate) node_count: usize,

    /// Offset array: index where each node's neighbors begin
    /// offsets[i] to offsets[i+1] defines the neighbor range for node i
    pub(crate) offsets: Vec<u32>,

    /// Neighbor array: concatenated lists of adjacent nodes
    pub(crate) adjacency: Vec<u32>,

    /// Edge list: each undirected edge exactly once
    pub(crate) edge_list: Vec<Edge>,

    /// Optional mapping from internal node IDs to original string labels
    pub(crate) node_ids: Option<Vec<String>>,
}

impl CompressedGraph {
    /// Get the neighbors of a node
    pub fn adjacent(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.adjacency[start..end]
    }

    /// Check if there's an edge between `a` and `b`
    pub fn has_edge(&self, a: usize, b: u32) -> bool {
        self.adjacent(a).binary_search(&b).is_ok()
    }

    /// Number of incident edges (a self-loop counts once)
    pub fn degree(&self, node: usize) -> usize {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        end - start
    }

    /// Every edge, each undirected edge exactly once
    pub fn edge_list(&self) -> &[Edge] {
        &self.edge_list
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_list.len()
    }

    /// Original label of a node, if the graph is labeled
    pub fn label(&self, node: usize) -> Option<&str> {
        self.node_ids
            .as_ref()
            .and_then(|ids| ids.get(node))
            .map(String::as_str)
    }

    /// Label of a node, falling back to its numeric id
    pub fn display_label(&self, node: usize) -> String {
        self.label(node)
            .map(str::to_string)
            .unwrap_or_else(|| node.to_string())
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u32>();
        let adjacency = self.adjacency.capacity() * mem::size_of::<u32>();
        let edge_list = self.edge_list.capacity() * mem::size_of::<Edge>();

        let ids = self.node_ids.as_ref()
            .map(|ids| ids.iter().map(|s| s.capacity()).sum::<usize>())
            .unwrap_or(0);

        base + offsets + adjacency + edge_list + ids
    }
}

impl GraphView for CompressedGraph {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edge_list.iter().copied()
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacent(node).iter().map(|&n| n as usize)
    }
}
