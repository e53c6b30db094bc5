mod common;
use crate::common::init_tracing;

use std::error::Error;

use husched::dag::TaskGraph;
use husched_test_utils::builders::GraphBuilder;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn tree_is_acyclic() {
    init_tracing();

    let graph = GraphBuilder::new()
        .edges(&[(1, 3), (2, 3), (3, 4)])
        .build();

    assert!(graph.is_acyclic());
    assert_eq!(graph.find_cycle_member(), None);
}

#[test]
fn cycle_is_detected_with_a_member() {
    init_tracing();

    let graph = GraphBuilder::new()
        .edges(&[(1, 2), (2, 3), (3, 1), (4, 1)])
        .build();

    assert!(!graph.is_acyclic());
    let member = graph.find_cycle_member().expect("cycle member");
    assert!([1, 2, 3].contains(&member));
}

#[test]
fn self_loop_is_a_cycle() {
    init_tracing();

    let graph = GraphBuilder::new().edge(5, 5).build();

    assert!(!graph.is_acyclic());
    assert_eq!(graph.find_cycle_member(), Some(5));
}

#[test]
fn empty_graph_is_acyclic() {
    assert!(TaskGraph::new().is_acyclic());
}

#[test]
fn contains_tracks_added_tasks() -> TestResult {
    init_tracing();

    let mut graph = TaskGraph::new();
    assert!(!graph.contains(1));

    graph.add_task(1)?;
    assert!(graph.ensure_task(2));
    assert!(!graph.ensure_task(2));
    graph.add_edge(1, 2)?;

    assert!(graph.contains(1));
    assert!(graph.contains(2));
    assert!(!graph.contains(3));
    assert_eq!(graph.edge_count(), 1);

    Ok(())
}

#[test]
fn reversed_flips_every_edge() {
    init_tracing();

    let graph = GraphBuilder::new().edges(&[(1, 3), (2, 3)]).build();
    let reversed = graph.reversed();

    assert_eq!(reversed.edges().collect::<Vec<_>>(), vec![(3, 1), (3, 2)]);
    assert!(reversed.is_acyclic());
}
