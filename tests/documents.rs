use std::fs;

use community_verifier::community::evaluate_candidates;
use community_verifier::storage::{save_reports, CandidateReport};
use community_verifier::{data, CommunityKind, GraphView};
use tempfile::TempDir;

const GRAPH: &str = r#"{
    "nodes": ["alice", "bob", "carol", "dave"],
    "edges": [
        {"source": "alice", "target": "bob"},
        {"source": "bob", "target": "carol"},
        {"source": "carol", "target": "dave", "weight": 5}
    ]
}"#;

const CANDIDATES: &str = r#"[
    ["alice", "bob", "carol"],
    ["carol", "dave"],
    []
]"#;

#[test]
fn test_load_evaluate_save() {
    let dir = TempDir::new().unwrap();
    let graph_path = dir.path().join("graph.json");
    let candidates_path = dir.path().join("candidates.json");
    fs::write(&graph_path, GRAPH).unwrap();
    fs::write(&candidates_path, CANDIDATES).unwrap();

    let graph = data::load_graph(&graph_path).unwrap();
    assert_eq!(graph.node_count(), 4);

    let candidates = data::load_candidates(&candidates_path, &graph).unwrap();
    assert_eq!(candidates.len(), 3);

    let reports = evaluate_candidates(&graph, &candidates, 0.5).unwrap();
    assert!(reports[0].bounded);
    assert!(reports[0].weak);
    assert!(!reports[0].weak_weighted);
    assert!(!reports[0].strong);
    assert!(reports[1].bounded);
    assert!(!reports[2].satisfies(CommunityKind::Bounded));

    let results: Vec<CandidateReport> = candidates
        .iter()
        .zip(reports)
        .enumerate()
        .map(|(index, (membership, report))| CandidateReport::new(&graph, index, membership, report))
        .collect();

    let output = dir.path().join("out").join("reports.json");
    save_reports(&output, &results).unwrap();

    let saved: Vec<CandidateReport> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(saved, results);
    assert_eq!(saved[1].members, vec!["carol".to_string(), "dave".to_string()]);
}

#[test]
fn test_missing_and_malformed_inputs() {
    let dir = TempDir::new().unwrap();

    assert!(data::load_graph(dir.path().join("absent.json")).is_err());

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{\"edges\": [{\"source\": \"a\"}]}").unwrap();
    assert!(data::load_graph(&broken).is_err());

    let graph_path = dir.path().join("graph.json");
    fs::write(&graph_path, GRAPH).unwrap();
    let graph = data::load_graph(&graph_path).unwrap();

    let unknown = dir.path().join("unknown.json");
    fs::write(&unknown, "[[\"alice\", \"mallory\"]]").unwrap();
    let err = data::load_candidates(&unknown, &graph).unwrap_err();
    assert!(err.to_string().contains("mallory"));
}
