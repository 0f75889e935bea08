//! Graph construction module

use crate::error::{InvalidInput, Result};
use crate::graph::{CompressedGraph, Edge};
use std::collections::HashMap;

/// Builder for incrementally constructing a CompressedGraph
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Number of nodes
    node_count: usize,

    /// Mapping from string labels to node indices
    id_to_index: HashMap<String, u32>,

    /// Node string labels (empty for unlabeled graphs)
    node_ids: Vec<String>,

    /// Adjacency lists for each node
    adjacency_lists: Vec<Vec<u32>>,

    /// Edges in insertion order
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            node_count: 0,
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
            edges: Vec::new(),
        }
    }

    /// Create a builder for an unlabeled graph with nodes `0..node_count`
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            node_count,
            adjacency_lists: vec![Vec::new(); node_count],
            ..Self::default()
        }
    }

    /// Get or create a node ID for the given label.
    ///
    /// Nodes created by [`with_nodes`](Self::with_nodes) take their numeric
    /// id as label once the first label is requested.
    pub fn get_or_create_node(&mut self, label: &str) -> u32 {
        while self.node_ids.len() < self.node_count {
            let id = self.node_ids.len();
            self.id_to_index.insert(id.to_string(), id as u32);
            self.node_ids.push(id.to_string());
        }

        if let Some(&idx) = self.id_to_index.get(label) {
            return idx;
        }

        let idx = self.node_count as u32;
        self.id_to_index.insert(label.to_string(), idx);
        self.node_ids.push(label.to_string());
        self.adjacency_lists.push(Vec::new());
        self.node_count += 1;

        idx
    }

    /// Add an undirected edge between two existing node ids
    pub fn add_edge(&mut self, start: usize, end: usize, weight: u32) -> Result<()> {
        if start >= self.node_count || end >= self.node_count {
            return Err(InvalidInput::EdgeOutOfRange {
                start,
                end,
                node_count: self.node_count,
            }
            .into());
        }

        self.adjacency_lists[start].push(end as u32);
        if start != end {
            self.adjacency_lists[end].push(start as u32);
        }
        self.edges.push(Edge::new(start, end, weight));

        Ok(())
    }

    /// Add an undirected edge between two labels, creating nodes as needed
    pub fn add_labeled_edge(&mut self, start: &str, end: &str, weight: u32) {
        let start_idx = self.get_or_create_node(start) as usize;
        let end_idx = self.get_or_create_node(end) as usize;

        self.adjacency_lists[start_idx].push(end_idx as u32);
        if start_idx != end_idx {
            self.adjacency_lists[end_idx].push(start_idx as u32);
        }
        self.edges.push(Edge::new(start_idx, end_idx, weight));
    }

    /// Build the compressed graph
    pub fn build(mut self) -> Result<CompressedGraph> {
        let adjacency_count: usize = self.adjacency_lists.iter()
            .map(|list| list.len())
            .sum();

        let mut offsets = Vec::with_capacity(self.node_count + 1);
        offsets.push(0);

        let mut offset = 0;
        for list in &self.adjacency_lists {
            offset += list.len() as u32;
            offsets.push(offset);
        }

        let mut adjacency = Vec::with_capacity(adjacency_count);
        for list in &mut self.adjacency_lists {
            // Sort for binary search efficiency
            list.sort_unstable();
            adjacency.extend_from_slice(list);
        }

        let node_ids = if self.node_ids.is_empty() {
            None
        } else {
            Some(self.node_ids)
        };

        log::debug!(
            "Built graph with {} nodes and {} edges",
            self.node_count,
            self.edges.len()
        );

        Ok(CompressedGraph {
            node_count: self.node_count,
            offsets,
            adjacency,
            edge_list: self.edges,
            node_ids,
        })
    }
}
