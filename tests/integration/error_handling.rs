// tests/integration/error_handling.rs

use std::io::Write;
use tempfile::NamedTempFile;
use husched::dag::{HuScheduler, TaskGraph};
use husched::errors::HuschedError;
use husched::input::{graph_from_edges, load_graph};
use husched::types::Delimiter;

#[test]
fn test_cycle_in_file_returns_structured_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "1,2\n2,3\n3,1\n").unwrap();

    let graph = load_graph(file.path(), Delimiter::default()).unwrap();
    let result = HuScheduler::new(2).unwrap().schedule(&graph);

    match result {
        Err(HuschedError::UnsupportedTopology(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains('1') || msg.contains('2') || msg.contains('3'));
        }
        Err(e) => panic!("Expected UnsupportedTopology error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_malformed_line_returns_structured_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "1,2\n2;3\n").unwrap();

    let result = load_graph(file.path(), Delimiter::default());

    match result {
        Err(HuschedError::MalformedInput { line, content, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "2;3");
        }
        Err(e) => panic!("Expected MalformedInput, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_duplicate_task_is_rejected() {
    let mut graph = TaskGraph::new();
    graph.add_task(1).unwrap();

    match graph.add_task(1) {
        Err(HuschedError::DuplicateTask(1)) => {}
        other => panic!("Expected DuplicateTask(1), got: {:?}", other),
    }
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_dangling_edge_names_missing_endpoint() {
    let mut graph = TaskGraph::new();
    graph.add_task(1).unwrap();

    match graph.add_edge(1, 9) {
        Err(HuschedError::DanglingEdge { from, to, missing }) => {
            assert_eq!((from, to, missing), (1, 9, 9));
        }
        other => panic!("Expected DanglingEdge, got: {:?}", other),
    }
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.successors_of(1).is_empty());
}

#[test]
fn test_error_messages_carry_context() {
    let dangling = HuschedError::DanglingEdge {
        from: 4,
        to: 5,
        missing: 5,
    };
    assert_eq!(dangling.to_string(), "Dangling edge 4 -> 5: task 5 is unknown");

    assert_eq!(
        HuschedError::InvalidMachineCount(0).to_string(),
        "Invalid machine count: 0 (must be >= 1)"
    );

    let unsupported = graph_from_edges(&[(1, 2), (1, 3), (2, 4), (3, 4)])
        .and_then(|g| HuScheduler::new(1)?.schedule(&g));
    assert!(matches!(unsupported, Err(HuschedError::UnsupportedTopology(_))));
}
