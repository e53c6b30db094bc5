// src/dag/levels.rs

//! Level assignment for classified trees and forests.
//!
//! Levels are computed with a breadth-first walk from the root(s). Forests
//! are walked from a virtual super-root whose children are the natural roots;
//! the virtual node only exists inside this module and is stripped from the
//! result.
//!
//! - in-orientation: the walk follows predecessor edges; raw depths are then
//!   flipped so the deepest leaves get level 1 and the root(s) the maximum.
//! - out-orientation: the walk follows successor edges; the root(s) get
//!   level 1 and levels grow with depth.

use std::collections::{BTreeMap, VecDeque};

use tracing::{debug, trace};

use crate::dag::graph::TaskGraph;
use crate::dag::topology::Topology;
use crate::errors::{HuschedError, Result};
use crate::types::{Orientation, TaskId};

/// Per-task levels for one classified graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelMap {
    orientation: Orientation,
    levels: BTreeMap<TaskId, u32>,
    max_level: u32,
}

impl LevelMap {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn level_of(&self, task: TaskId) -> Option<u32> {
        self.levels.get(&task).copied()
    }

    /// `(task, level)` pairs, ascending by task id.
    pub fn iter(&self) -> impl Iterator<Item = (TaskId, u32)> + '_ {
        self.levels.iter().map(|(&task, &level)| (task, level))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Highest level; equal to the number of tasks on the longest chain.
    pub fn max_level(&self) -> u32 {
        self.max_level
    }
}

/// Synthetic root joining the trees of a forest.
#[derive(Debug, Clone)]
struct VirtualRoot {
    id: TaskId,
    children: Vec<TaskId>,
}

impl VirtualRoot {
    /// Allocate the id one above the largest real task id.
    fn for_forest(graph: &TaskGraph, roots: &[TaskId]) -> Result<Self> {
        let id = graph
            .max_task()
            .and_then(|max| max.checked_add(1))
            .ok_or_else(|| {
                HuschedError::UnsupportedTopology(
                    "no task id left for the forest super-root".to_string(),
                )
            })?;

        Ok(Self {
            id,
            children: roots.to_vec(),
        })
    }
}

/// Compute levels for every task of `graph` according to `topology`.
pub fn assign_levels(graph: &TaskGraph, topology: &Topology) -> Result<LevelMap> {
    let orientation = topology.orientation();

    let virtual_root = if topology.is_forest() {
        Some(VirtualRoot::for_forest(graph, topology.roots())?)
    } else {
        None
    };

    let start = match &virtual_root {
        Some(vr) => vr.id,
        None => topology.roots()[0],
    };

    let mut raw = breadth_first_depths(graph, orientation, start, virtual_root.as_ref());

    if let Some(vr) = &virtual_root {
        raw.remove(&vr.id);
        trace!(super_root = vr.id, "stripped virtual super-root from levels");
    }

    if let Some(missing) = graph.tasks().find(|id| !raw.contains_key(id)) {
        return Err(HuschedError::UnsupportedTopology(format!(
            "task {missing} is not reachable from the {} root(s) {:?}",
            topology.kind(),
            topology.roots(),
        )));
    }
    if raw.len() != graph.len() {
        return Err(HuschedError::UnsupportedTopology(format!(
            "{} root(s) {:?} do not belong to the graph",
            topology.kind(),
            topology.roots(),
        )));
    }

    let levels: BTreeMap<TaskId, u32> = match orientation {
        Orientation::In => {
            let max_raw = raw.values().copied().max().unwrap_or(0);
            raw.into_iter()
                .map(|(task, depth)| (task, max_raw - depth + 1))
                .collect()
        }
        Orientation::Out => {
            let offset = u32::from(virtual_root.is_some());
            raw.into_iter()
                .map(|(task, depth)| (task, depth - offset))
                .collect()
        }
    };

    let max_level = levels.values().copied().max().unwrap_or(0);

    debug!(
        orientation = %orientation,
        tasks = levels.len(),
        max_level,
        "assigned levels"
    );

    Ok(LevelMap {
        orientation,
        levels,
        max_level,
    })
}

/// Raw depths from `start` (depth 1), walking away from the root side.
///
/// The first visit of a task fixes its depth; in a tree every task is reached
/// through exactly one path anyway.
fn breadth_first_depths(
    graph: &TaskGraph,
    orientation: Orientation,
    start: TaskId,
    virtual_root: Option<&VirtualRoot>,
) -> BTreeMap<TaskId, u32> {
    let mut depths: BTreeMap<TaskId, u32> = BTreeMap::new();
    let mut queue: VecDeque<(TaskId, u32)> = VecDeque::from([(start, 1)]);

    while let Some((task, depth)) = queue.pop_front() {
        if depths.contains_key(&task) {
            continue;
        }
        depths.insert(task, depth);

        let children: Vec<TaskId> = match virtual_root {
            Some(vr) if vr.id == task => vr.children.clone(),
            _ => match orientation {
                Orientation::In => graph.predecessors_of(task).iter().copied().collect(),
                Orientation::Out => graph.successors_of(task).iter().copied().collect(),
            },
        };

        for child in children {
            if !depths.contains_key(&child) {
                queue.push_back((child, depth + 1));
            }
        }
    }

    depths
}
