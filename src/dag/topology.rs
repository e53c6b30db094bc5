// src/dag/topology.rs

//! Shape detection for precedence graphs.
//!
//! Hu's algorithm is only defined for trees and forests. [`classify`] runs a
//! fixed sequence of degree tests and returns the first shape that matches:
//!
//! 1. in-tree (single sink, every other task has exactly one successor)
//! 2. out-tree (single source, every other task has exactly one predecessor)
//! 3. in-forest (every task has at most one successor)
//! 4. out-forest (every task has at most one predecessor)
//!
//! The order matters when more than one test passes: a graph of isolated tasks
//! is both an in-forest and an out-forest and is reported as an in-forest.

use std::fmt;

use tracing::debug;

use crate::dag::graph::TaskGraph;
use crate::errors::{HuschedError, Result};
use crate::types::{Orientation, TaskId};

/// Detected shape of a precedence graph, with its root(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topology {
    InTree { root: TaskId },
    OutTree { root: TaskId },
    /// Roots are the tasks without successors, ascending.
    InForest { roots: Vec<TaskId> },
    /// Roots are the tasks without predecessors, ascending.
    OutForest { roots: Vec<TaskId> },
}

impl Topology {
    pub fn orientation(&self) -> Orientation {
        match self {
            Topology::InTree { .. } | Topology::InForest { .. } => Orientation::In,
            Topology::OutTree { .. } | Topology::OutForest { .. } => Orientation::Out,
        }
    }

    pub fn roots(&self) -> &[TaskId] {
        match self {
            Topology::InTree { root } | Topology::OutTree { root } => std::slice::from_ref(root),
            Topology::InForest { roots } | Topology::OutForest { roots } => roots,
        }
    }

    pub fn is_forest(&self) -> bool {
        matches!(self, Topology::InForest { .. } | Topology::OutForest { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Topology::InTree { .. } => "in-tree",
            Topology::OutTree { .. } => "out-tree",
            Topology::InForest { .. } => "in-forest",
            Topology::OutForest { .. } => "out-forest",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::InTree { root } | Topology::OutTree { root } => {
                write!(f, "{} (root {root})", self.kind())
            }
            Topology::InForest { roots } | Topology::OutForest { roots } => {
                write!(f, "{} (roots {roots:?})", self.kind())
            }
        }
    }
}

/// Classify `graph` as one of the four supported shapes.
///
/// Fails with [`HuschedError::UnsupportedTopology`] for an empty graph, a
/// cyclic graph, or any graph that is neither a tree nor a forest.
pub fn classify(graph: &TaskGraph) -> Result<Topology> {
    if graph.is_empty() {
        return Err(HuschedError::UnsupportedTopology(
            "graph has no tasks".to_string(),
        ));
    }

    if let Some(task) = graph.find_cycle_member() {
        return Err(HuschedError::UnsupportedTopology(format!(
            "cycle detected in precedence graph involving task {task}"
        )));
    }

    let topology = if let Some(root) = single_sink_tree_root(graph) {
        Topology::InTree { root }
    } else if let Some(root) = single_sink_tree_root(&graph.reversed()) {
        Topology::OutTree { root }
    } else if let Some(roots) = in_forest_roots(graph) {
        Topology::InForest { roots }
    } else if let Some(roots) = in_forest_roots(&graph.reversed()) {
        Topology::OutForest { roots }
    } else {
        return Err(HuschedError::UnsupportedTopology(describe_violation(graph)));
    };

    debug!(
        topology = topology.kind(),
        roots = ?topology.roots(),
        tasks = graph.len(),
        edges = graph.edge_count(),
        "classified precedence graph"
    );

    Ok(topology)
}

/// In-tree test on an acyclic graph: exactly one task without successors,
/// every other task with exactly one.
///
/// The out-tree test is the same check on the reversed graph.
fn single_sink_tree_root(graph: &TaskGraph) -> Option<TaskId> {
    let mut root = None;

    for id in graph.tasks() {
        match graph.out_degree(id) {
            0 if root.is_none() => root = Some(id),
            1 => {}
            _ => return None,
        }
    }

    root
}

/// In-forest test on an acyclic graph: every task has at most one successor
/// and at least one task has none. Returns those successor-less tasks.
///
/// The out-forest test is the same check on the reversed graph.
fn in_forest_roots(graph: &TaskGraph) -> Option<Vec<TaskId>> {
    if graph.tasks().any(|id| graph.out_degree(id) > 1) {
        return None;
    }

    let roots: Vec<TaskId> = graph
        .tasks()
        .filter(|&id| graph.out_degree(id) == 0)
        .collect();

    if roots.is_empty() { None } else { Some(roots) }
}

/// Name a task that keeps an acyclic graph from being a forest of either
/// orientation.
fn describe_violation(graph: &TaskGraph) -> String {
    let fan_out = graph.tasks().find(|&id| graph.out_degree(id) > 1);
    let fan_in = graph.tasks().find(|&id| graph.in_degree(id) > 1);

    match (fan_out, fan_in) {
        (Some(out), Some(inn)) if out == inn => format!(
            "task {out} has {} predecessors and {} successors; not an in/out tree or forest",
            graph.in_degree(out),
            graph.out_degree(out),
        ),
        (Some(out), Some(inn)) => format!(
            "task {out} has {} successors and task {inn} has {} predecessors; not an in/out tree or forest",
            graph.out_degree(out),
            graph.in_degree(inn),
        ),
        _ => "graph is not an in-tree, out-tree, in-forest or out-forest".to_string(),
    }
}
