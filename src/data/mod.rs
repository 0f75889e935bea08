//! JSON input documents for the command-line tool

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::community::Membership;
use crate::error::{InvalidInput, Result};
use crate::graph::{CompressedGraph, GraphBuilder};

/// Node label as written in a document: a string or a bare number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Id(u64),
    Name(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Id(id) => write!(f, "{}", id),
            Label::Name(name) => f.write_str(name),
        }
    }
}

/// One weighted edge between two labeled nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: Label,
    pub target: Label,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

/// Graph document: optional node list (for isolated nodes and a stable id
/// order) followed by the edge list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<Label>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Build a labeled graph; listed nodes take the first ids in order
    pub fn build(&self) -> Result<CompressedGraph> {
        let mut builder = GraphBuilder::with_capacity(self.nodes.len());
        for node in &self.nodes {
            builder.get_or_create_node(&node.to_string());
        }
        for edge in &self.edges {
            builder.add_labeled_edge(&edge.source.to_string(), &edge.target.to_string(), edge.weight);
        }
        builder.build()
    }
}

/// Resolve candidate label lists against the labels of `graph`
pub fn resolve_candidates(graph: &CompressedGraph, candidates: &[Vec<Label>]) -> Result<Vec<Membership>> {
    let index: HashMap<&str, usize> = graph
        .node_ids
        .iter()
        .flatten()
        .enumerate()
        .map(|(id, label)| (label.as_str(), id))
        .collect();

    candidates
        .iter()
        .map(|labels| -> Result<Membership> {
            let ids = labels
                .iter()
                .map(|label| {
                    let label = label.to_string();
                    index
                        .get(label.as_str())
                        .copied()
                        .ok_or(InvalidInput::UnknownLabel(label))
                })
                .collect::<std::result::Result<Vec<usize>, InvalidInput>>()?;
            Membership::from_members(graph.node_count, ids)
        })
        .collect()
}

/// Load a graph document from a JSON file
pub fn load_graph<P: AsRef<Path>>(path: P) -> anyhow::Result<CompressedGraph> {
    let path = path.as_ref();
    log::info!("Reading graph file: {}", path.display());

    if !path.exists() {
        return Err(anyhow::anyhow!("File not found: {}", path.display()));
    }

    let reader = BufReader::new(File::open(path)?);
    let document: GraphDocument = serde_json::from_reader(reader)
        .with_context(|| format!("Malformed graph document: {}", path.display()))?;
    let graph = document.build()?;

    log::info!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count,
        graph.edge_count()
    );

    Ok(graph)
}

/// Load candidate subsets (a JSON array of label arrays) for `graph`
pub fn load_candidates<P: AsRef<Path>>(path: P, graph: &CompressedGraph) -> anyhow::Result<Vec<Membership>> {
    let path = path.as_ref();
    log::info!("Reading candidates file: {}", path.display());

    if !path.exists() {
        return Err(anyhow::anyhow!("File not found: {}", path.display()));
    }

    let reader = BufReader::new(File::open(path)?);
    let labels: Vec<Vec<Label>> = serde_json::from_reader(reader)
        .with_context(|| format!("Malformed candidates document: {}", path.display()))?;
    let candidates = resolve_candidates(graph, &labels)?;

    log::info!("Loaded {} candidates", candidates.len());

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn document() -> GraphDocument {
        serde_json::from_str(
            r#"{
                "nodes": ["d"],
                "edges": [
                    {"source": "a", "target": "b"},
                    {"source": "b", "target": 7, "weight": 4}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_document_builds_labeled_graph() {
        let graph = document().build().unwrap();

        assert_eq!(graph.node_count, 4);
        assert_eq!(graph.label(0), Some("d"));
        assert_eq!(graph.label(3), Some("7"));
        assert_eq!(graph.edge_list[0].weight, 1);
        assert_eq!(graph.edge_list[1].weight, 4);
    }

    #[test]
    fn test_resolve_candidates() {
        let graph = document().build().unwrap();
        let labels = vec![
            vec![Label::Name("a".into()), Label::Name("b".into())],
            vec![Label::Id(7)],
        ];
        let candidates = resolve_candidates(&graph, &labels).unwrap();

        assert_eq!(candidates[0].members().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(candidates[1].members().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let graph = document().build().unwrap();
        let err = resolve_candidates(&graph, &[vec![Label::Name("zed".into())]]).unwrap_err();
        assert_eq!(err, Error::InvalidInput(InvalidInput::UnknownLabel("zed".into())));
    }
}
