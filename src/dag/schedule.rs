// src/dag/schedule.rs

//! Read-only result of a scheduling run.

use std::fmt;

use crate::types::TaskId;

/// One unit-time task placed on a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub task: TaskId,
    /// 0-based start slot; the task occupies `[start, start + 1)`.
    pub start: u32,
}

/// Per-machine ordered assignments produced by the scheduler.
///
/// Machine `i` is `machines[i]`; each machine's assignments are sorted by
/// start time. Every scheduled task appears exactly once across all machines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    machines: Vec<Vec<Assignment>>,
}

impl Schedule {
    pub(crate) fn from_machines(machines: Vec<Vec<Assignment>>) -> Self {
        Self { machines }
    }

    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }

    /// Assignments of machine `index` (empty if out of range).
    pub fn machine(&self, index: usize) -> &[Assignment] {
        self.machines
            .get(index)
            .map(|m| m.as_slice())
            .unwrap_or(&[])
    }

    pub fn machines(&self) -> impl Iterator<Item = &[Assignment]> {
        self.machines.iter().map(|m| m.as_slice())
    }

    /// All `(machine, assignment)` pairs, machine by machine.
    pub fn assignments(&self) -> impl Iterator<Item = (usize, Assignment)> + '_ {
        self.machines
            .iter()
            .enumerate()
            .flat_map(|(machine, list)| list.iter().map(move |a| (machine, *a)))
    }

    /// Number of scheduled tasks.
    pub fn len(&self) -> usize {
        self.machines.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start slot of `task`, if it was scheduled.
    pub fn start_of(&self, task: TaskId) -> Option<u32> {
        self.assignments()
            .find(|(_, a)| a.task == task)
            .map(|(_, a)| a.start)
    }

    /// Completion time of the last task: max over `start + 1`, 0 when empty.
    pub fn makespan(&self) -> u32 {
        self.assignments()
            .map(|(_, a)| a.start + 1)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Schedule {
    /// One `M<n>: [(task, start), ...]` line per machine (1-based), then the makespan.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, machine) in self.machines.iter().enumerate() {
            let entries: Vec<String> = machine
                .iter()
                .map(|a| format!("({}, {})", a.task, a.start))
                .collect();
            writeln!(f, "M{}: [{}]", index + 1, entries.join(", "))?;
        }
        write!(f, "makespan: {}", self.makespan())
    }
}
