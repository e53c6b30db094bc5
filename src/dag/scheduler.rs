// src/dag/scheduler.rs

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use tracing::{debug, info, trace};

use crate::dag::graph::TaskGraph;
use crate::dag::levels::{LevelMap, assign_levels};
use crate::dag::schedule::{Assignment, Schedule};
use crate::dag::topology::classify;
use crate::errors::{HuschedError, Result};
use crate::types::{Orientation, TaskId};

/// Hu's list scheduler for unit-time tasks on `m` identical machines.
///
/// The scheduler holds only the machine count; every call to
/// [`HuScheduler::schedule`] classifies the graph, assigns levels and builds a
/// fresh [`Schedule`]. Nothing is cached between calls.
///
/// Ready tasks are taken by their Hu label (the number of tasks on the path
/// from the task to the sink side of its tree), highest first:
///
/// - in-trees and in-forests run forward in time; the label of a task is
///   `max_level - level + 1` and ties go to the lowest task id.
/// - out-trees and out-forests run over the reversed precedence, which is an
///   in-forest whose label is exactly the task's level. Ties go to the highest
///   id there, and the resulting slots are mirrored in time and sorted by id,
///   so lower ids still come first in the final schedule.
///
/// Both give an optimal makespan for this class of precedence graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuScheduler {
    machines: usize,
}

impl HuScheduler {
    /// A scheduler for `machines` identical machines (must be at least 1).
    pub fn new(machines: usize) -> Result<Self> {
        if machines == 0 {
            return Err(HuschedError::InvalidMachineCount(0));
        }
        Ok(Self { machines })
    }

    /// Like [`HuScheduler::new`] for signed input such as CLI or config values.
    pub fn from_count(machines: i64) -> Result<Self> {
        match usize::try_from(machines) {
            Ok(m) if m > 0 => Ok(Self { machines: m }),
            _ => Err(HuschedError::InvalidMachineCount(machines)),
        }
    }

    pub fn machines(&self) -> usize {
        self.machines
    }

    /// Classify `graph`, assign levels and schedule it.
    ///
    /// No schedule is produced if the graph is not an in/out tree or forest.
    pub fn schedule(&self, graph: &TaskGraph) -> Result<Schedule> {
        let topology = classify(graph)?;
        info!(
            topology = %topology,
            tasks = graph.len(),
            machines = self.machines,
            "scheduling precedence graph"
        );

        let levels = assign_levels(graph, &topology)?;
        self.schedule_leveled(graph, &levels)
    }

    /// Schedule an already classified and leveled graph.
    ///
    /// `levels` must come from [`assign_levels`] on this same graph; a level
    /// map that misses a task, or names one the graph lacks, is rejected.
    pub fn schedule_leveled(&self, graph: &TaskGraph, levels: &LevelMap) -> Result<Schedule> {
        check_levels_match(graph, levels)?;

        let max_level = levels.max_level();

        let slots = match levels.orientation() {
            Orientation::In => self.list_schedule(
                levels,
                |task| graph.predecessors_of(task).len(),
                |task| graph.successors_of(task).iter().copied().collect(),
                |level| max_level - level + 1,
                TieBreak::LowestId,
            ),
            Orientation::Out => {
                let reversed = self.list_schedule(
                    levels,
                    |task| graph.successors_of(task).len(),
                    |task| graph.predecessors_of(task).iter().copied().collect(),
                    |level| level,
                    TieBreak::HighestId,
                );
                mirror(reversed)
            }
        };

        let schedule = self.into_schedule(slots)?;
        debug!(
            tasks = schedule.len(),
            makespan = schedule.makespan(),
            "schedule complete"
        );
        Ok(schedule)
    }

    /// Greedy slot-by-slot list scheduling over one precedence direction.
    ///
    /// `blockers(t)` is how many tasks must finish before `t` may start,
    /// `released(t)` the tasks waiting on `t`. Returns the tasks of each slot
    /// in machine order.
    fn list_schedule(
        &self,
        levels: &LevelMap,
        blockers: impl Fn(TaskId) -> usize,
        released: impl Fn(TaskId) -> Vec<TaskId>,
        priority: impl Fn(u32) -> u32,
        ties: TieBreak,
    ) -> Vec<Vec<TaskId>> {
        let mut waiting_on: BTreeMap<TaskId, usize> = BTreeMap::new();
        let mut ready: BinaryHeap<ReadyTask> = BinaryHeap::new();
        let entry = |task: TaskId, level: u32| ReadyTask {
            priority: priority(level),
            task,
            ties,
        };

        for (task, level) in levels.iter() {
            let count = blockers(task);
            if count == 0 {
                ready.push(entry(task, level));
            } else {
                waiting_on.insert(task, count);
            }
        }

        let mut slots: Vec<Vec<TaskId>> = Vec::new();

        while !ready.is_empty() {
            let mut slot = Vec::with_capacity(self.machines);
            while slot.len() < self.machines {
                match ready.pop() {
                    Some(next) => slot.push(next.task),
                    None => break,
                }
            }

            trace!(slot = slots.len(), tasks = ?slot, "filled time slot");

            // Completions only become visible to the next slot.
            for &task in &slot {
                for next in released(task) {
                    if let Some(count) = waiting_on.get_mut(&next) {
                        *count -= 1;
                        if *count == 0 {
                            waiting_on.remove(&next);
                            let level = levels.level_of(next).unwrap_or(0);
                            ready.push(entry(next, level));
                        }
                    }
                }
            }

            slots.push(slot);
        }

        slots
    }

    fn into_schedule(&self, slots: Vec<Vec<TaskId>>) -> Result<Schedule> {
        let mut machines: Vec<Vec<Assignment>> = vec![Vec::new(); self.machines];

        for (index, slot) in slots.into_iter().enumerate() {
            let start = u32::try_from(index).map_err(|_| {
                HuschedError::UnsupportedTopology(format!(
                    "schedule needs more than {} time slots",
                    u32::MAX
                ))
            })?;
            for (machine, task) in slot.into_iter().enumerate() {
                machines[machine].push(Assignment { task, start });
            }
        }

        Ok(Schedule::from_machines(machines))
    }
}

/// Every task of `graph` has a level and every leveled task is in `graph`.
fn check_levels_match(graph: &TaskGraph, levels: &LevelMap) -> Result<()> {
    if let Some(task) = graph.tasks().find(|&task| levels.level_of(task).is_none()) {
        return Err(HuschedError::UnsupportedTopology(format!(
            "task {task} has no level; levels were assigned for another graph"
        )));
    }
    if let Some((task, _)) = levels.iter().find(|&(task, _)| !graph.contains(task)) {
        return Err(HuschedError::UnsupportedTopology(format!(
            "level map names task {task}, which is not in the graph"
        )));
    }
    Ok(())
}

/// Which task wins when two ready tasks have the same label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TieBreak {
    LowestId,
    HighestId,
}

/// Max-heap entry: higher priority first, then by the tie rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReadyTask {
    priority: u32,
    task: TaskId,
    ties: TieBreak,
}

impl Ord for ReadyTask {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| match self.ties {
                TieBreak::LowestId => other.task.cmp(&self.task),
                TieBreak::HighestId => self.task.cmp(&other.task),
            })
    }
}

impl PartialOrd for ReadyTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reverse slot order (the last slot of the reversed run becomes slot 0) and
/// sort each slot by task id.
fn mirror(mut slots: Vec<Vec<TaskId>>) -> Vec<Vec<TaskId>> {
    slots.reverse();
    for slot in &mut slots {
        slot.sort_unstable();
    }
    slots
}
