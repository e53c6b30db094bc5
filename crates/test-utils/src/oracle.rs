//! Reference checks for schedules: feasibility, lower bounds and an
//! exhaustive optimum for small graphs.

use std::collections::{BTreeMap, HashMap, VecDeque};

use husched::dag::{Schedule, TaskGraph};
use husched::types::TaskId;

/// Largest graph `optimal_makespan` accepts.
pub const MAX_ORACLE_TASKS: usize = 12;

/// Check that `schedule` is a valid unit-time schedule of `graph` on
/// `machines` machines. Returns a description of the first violation.
pub fn check_schedule(graph: &TaskGraph, schedule: &Schedule, machines: usize) -> Result<(), String> {
    if schedule.machine_count() != machines {
        return Err(format!(
            "expected {machines} machine(s), schedule has {}",
            schedule.machine_count()
        ));
    }

    let mut starts: BTreeMap<TaskId, u32> = BTreeMap::new();
    let mut per_slot: BTreeMap<u32, usize> = BTreeMap::new();

    for (machine, list) in schedule.machines().enumerate() {
        for pair in list.windows(2) {
            if pair[0].start >= pair[1].start {
                return Err(format!(
                    "machine {machine} runs task {} at {} and task {} at {}",
                    pair[0].task, pair[0].start, pair[1].task, pair[1].start
                ));
            }
        }
        for a in list {
            if starts.insert(a.task, a.start).is_some() {
                return Err(format!("task {} scheduled more than once", a.task));
            }
            *per_slot.entry(a.start).or_default() += 1;
        }
    }

    for task in graph.tasks() {
        if !starts.contains_key(&task) {
            return Err(format!("task {task} was never scheduled"));
        }
    }
    if starts.len() != graph.len() {
        return Err("schedule contains tasks that are not in the graph".to_string());
    }

    for (slot, count) in per_slot {
        if count > machines {
            return Err(format!("{count} tasks share slot {slot} on {machines} machine(s)"));
        }
    }

    for (from, to) in graph.edges() {
        if starts[&from] + 1 > starts[&to] {
            return Err(format!(
                "task {to} starts at {} before predecessor {from} (start {}) finished",
                starts[&to], starts[&from]
            ));
        }
    }

    Ok(())
}

/// Number of tasks on the longest precedence chain.
pub fn longest_chain(graph: &TaskGraph) -> u32 {
    fn chain_to(graph: &TaskGraph, task: TaskId, memo: &mut HashMap<TaskId, u32>) -> u32 {
        if let Some(&len) = memo.get(&task) {
            return len;
        }
        let len = 1 + graph
            .predecessors_of(task)
            .iter()
            .map(|&p| chain_to(graph, p, memo))
            .max()
            .unwrap_or(0);
        memo.insert(task, len);
        len
    }

    let mut memo = HashMap::new();
    graph
        .tasks()
        .map(|t| chain_to(graph, t, &mut memo))
        .max()
        .unwrap_or(0)
}

/// `max(ceil(n / m), longest chain)`: no schedule can be shorter.
pub fn makespan_lower_bound(graph: &TaskGraph, machines: usize) -> u32 {
    let by_count = graph.len().div_ceil(machines) as u32;
    by_count.max(longest_chain(graph))
}

/// Optimal makespan by breadth-first search over sets of finished tasks.
///
/// Each step schedules `min(m, ready)` ready tasks; for unit-time tasks some
/// optimal schedule never leaves a machine idle while a task is ready, so this
/// is exact. Only for graphs of at most [`MAX_ORACLE_TASKS`] tasks.
pub fn optimal_makespan(graph: &TaskGraph, machines: usize) -> u32 {
    let ids: Vec<TaskId> = graph.tasks().collect();
    let n = ids.len();
    assert!(n <= MAX_ORACLE_TASKS, "oracle limited to {MAX_ORACLE_TASKS} tasks, got {n}");

    let index: HashMap<TaskId, usize> = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let pred_mask: Vec<u32> = ids
        .iter()
        .map(|&id| {
            graph
                .predecessors_of(id)
                .iter()
                .fold(0u32, |mask, p| mask | (1 << index[p]))
        })
        .collect();

    let full: u32 = (1u32 << n) - 1;
    let mut dist: Vec<Option<u32>> = vec![None; 1 << n];
    dist[0] = Some(0);
    let mut queue = VecDeque::from([0u32]);

    while let Some(done) = queue.pop_front() {
        let steps = dist[done as usize].unwrap_or(0);
        if done == full {
            return steps;
        }

        let ready: u32 = (0..n)
            .filter(|&i| done & (1 << i) == 0 && pred_mask[i] & !done == 0)
            .fold(0, |mask, i| mask | (1 << i));
        let take = (ready.count_ones() as usize).min(machines) as u32;

        // Enumerate the subsets of `ready` with exactly `take` members.
        let mut subset = ready;
        loop {
            if subset.count_ones() == take {
                let next = done | subset;
                if dist[next as usize].is_none() {
                    dist[next as usize] = Some(steps + 1);
                    queue.push_back(next);
                }
            }
            if subset == 0 {
                break;
            }
            subset = (subset - 1) & ready;
        }
    }

    dist[full as usize].unwrap_or(0)
}
