// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::errors::{HuschedError, Result};
use crate::types::TaskId;

/// Internal node structure: stores immediate predecessors and successors.
#[derive(Debug, Clone, Default)]
struct TaskNode {
    /// Tasks that must finish before this one can start.
    predecessors: BTreeSet<TaskId>,
    /// Tasks that wait for this one.
    successors: BTreeSet<TaskId>,
}

/// In-memory precedence graph of unit-time tasks keyed by id.
///
/// Every task is a record in an ordered arena; edges are kept twice, once in
/// the predecessor set of the target and once in the successor set of the
/// source. Ordered collections keep every query deterministic.
///
/// Acyclicity is not enforced on insertion; see [`TaskGraph::is_acyclic`].
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    nodes: BTreeMap<TaskId, TaskNode>,
    edge_count: usize,
}

static NO_TASKS: BTreeSet<TaskId> = BTreeSet::new();

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new task. Fails if the id is already present.
    pub fn add_task(&mut self, id: TaskId) -> Result<()> {
        if self.nodes.contains_key(&id) {
            return Err(HuschedError::DuplicateTask(id));
        }
        self.nodes.insert(id, TaskNode::default());
        Ok(())
    }

    /// Add the task if it is not there yet. Returns `true` if it was added.
    pub fn ensure_task(&mut self, id: TaskId) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id, TaskNode::default());
        true
    }

    /// Add a precedence edge `from -> to` (`from` must finish before `to`).
    ///
    /// Both endpoints must already exist. Adding an existing edge again is a
    /// no-op.
    pub fn add_edge(&mut self, from: TaskId, to: TaskId) -> Result<()> {
        for id in [from, to] {
            if !self.nodes.contains_key(&id) {
                return Err(HuschedError::DanglingEdge {
                    from,
                    to,
                    missing: id,
                });
            }
        }

        let inserted = self
            .nodes
            .get_mut(&from)
            .map(|n| n.successors.insert(to))
            .unwrap_or(false);
        if let Some(node) = self.nodes.get_mut(&to) {
            node.predecessors.insert(from);
        }
        if inserted {
            self.edge_count += 1;
        }
        Ok(())
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All task ids, ascending.
    pub fn tasks(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.nodes.keys().copied()
    }

    /// All edges as `(predecessor, successor)` pairs, ordered by source then target.
    pub fn edges(&self) -> impl Iterator<Item = (TaskId, TaskId)> + '_ {
        self.nodes
            .iter()
            .flat_map(|(&from, node)| node.successors.iter().map(move |&to| (from, to)))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Largest task id, if any.
    pub fn max_task(&self) -> Option<TaskId> {
        self.nodes.keys().next_back().copied()
    }

    /// Immediate successors of a task (empty for unknown ids).
    pub fn successors_of(&self, id: TaskId) -> &BTreeSet<TaskId> {
        self.nodes.get(&id).map(|n| &n.successors).unwrap_or(&NO_TASKS)
    }

    /// Immediate predecessors of a task (empty for unknown ids).
    pub fn predecessors_of(&self, id: TaskId) -> &BTreeSet<TaskId> {
        self.nodes.get(&id).map(|n| &n.predecessors).unwrap_or(&NO_TASKS)
    }

    pub fn out_degree(&self, id: TaskId) -> usize {
        self.successors_of(id).len()
    }

    pub fn in_degree(&self, id: TaskId) -> usize {
        self.predecessors_of(id).len()
    }

    /// A copy of this graph with every edge flipped.
    pub fn reversed(&self) -> Self {
        let nodes = self
            .nodes
            .iter()
            .map(|(&id, node)| {
                (
                    id,
                    TaskNode {
                        predecessors: node.successors.clone(),
                        successors: node.predecessors.clone(),
                    },
                )
            })
            .collect();

        Self {
            nodes,
            edge_count: self.edge_count,
        }
    }

    /// `true` if the graph is a directed acyclic graph.
    pub fn is_acyclic(&self) -> bool {
        self.find_cycle_member().is_none()
    }

    /// Some task that lies on a cycle, or `None` for a DAG.
    ///
    /// Self-loops count as cycles.
    pub fn find_cycle_member(&self) -> Option<TaskId> {
        let mut graph: DiGraphMap<TaskId, ()> = DiGraphMap::new();

        for id in self.tasks() {
            graph.add_node(id);
        }
        for (from, to) in self.edges() {
            graph.add_edge(from, to, ());
        }

        // A topological sort will fail if there is a cycle.
        match toposort(&graph, None) {
            Ok(_order) => None,
            Err(cycle) => Some(cycle.node_id()),
        }
    }
}
