use proptest::prelude::*;
use husched::dag::{HuScheduler, TaskGraph, assign_levels, classify};
use husched::types::Orientation;
use husched_test_utils::builders::forest_from_parents;
use husched_test_utils::oracle::{
    MAX_ORACLE_TASKS, check_schedule, longest_chain, makespan_lower_bound, optimal_makespan,
};

// Strategy to generate a forest as a parent table.
// We ensure a forest by only allowing task N to hang below a task in 0..N-1.
fn parents_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<Option<usize>>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        proptest::collection::vec((any::<bool>(), any::<usize>()), num_tasks).prop_map(
            |raw| {
                raw.into_iter()
                    .enumerate()
                    .map(|(i, (is_root, pick))| {
                        // Sanitize: task 0 is always a root, others pick a parent < i.
                        if i == 0 || is_root { None } else { Some(pick % i) }
                    })
                    .collect()
            },
        )
    })
}

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::In), Just(Orientation::Out)]
}

fn schedule_of(graph: &TaskGraph, machines: usize) -> husched::dag::Schedule {
    HuScheduler::new(machines)
        .and_then(|s| s.schedule(graph))
        .expect("generated forests are always schedulable")
}

proptest! {
    #[test]
    fn test_every_forest_is_classified_with_matching_orientation(
        parents in parents_strategy(16),
        orientation in orientation_strategy(),
    ) {
        let graph = forest_from_parents(&parents, orientation);
        let topology = classify(&graph).expect("forest must classify");

        // Chains and isolated tasks are valid under both orientations and
        // resolve to the in-side by priority; everything else keeps its own.
        let fans_out = graph.tasks().any(|t| graph.out_degree(t) > 1);
        if orientation == Orientation::Out && fans_out {
            prop_assert_eq!(topology.orientation(), Orientation::Out);
        }
        if orientation == Orientation::In {
            prop_assert_eq!(topology.orientation(), Orientation::In);
        }

        let levels = assign_levels(&graph, &topology).expect("levels");
        prop_assert_eq!(levels.len(), graph.len());
        prop_assert_eq!(levels.max_level(), longest_chain(&graph));
        prop_assert!(levels.iter().all(|(_, level)| level >= 1));
    }

    #[test]
    fn test_schedule_is_feasible_and_complete(
        parents in parents_strategy(24),
        orientation in orientation_strategy(),
        machines in 1..6usize,
    ) {
        let graph = forest_from_parents(&parents, orientation);
        let schedule = schedule_of(&graph, machines);

        if let Err(violation) = check_schedule(&graph, &schedule, machines) {
            prop_assert!(false, "infeasible schedule: {}", violation);
        }
        prop_assert!(schedule.makespan() >= makespan_lower_bound(&graph, machines));
    }

    #[test]
    fn test_makespan_is_optimal(
        parents in parents_strategy(MAX_ORACLE_TASKS - 2),
        orientation in orientation_strategy(),
        machines in 1..4usize,
    ) {
        let graph = forest_from_parents(&parents, orientation);
        let schedule = schedule_of(&graph, machines);

        prop_assert_eq!(schedule.makespan(), optimal_makespan(&graph, machines));
    }

    #[test]
    fn test_makespan_meets_bound_for_one_or_many_machines(
        parents in parents_strategy(20),
        orientation in orientation_strategy(),
    ) {
        let graph = forest_from_parents(&parents, orientation);

        prop_assert_eq!(schedule_of(&graph, 1).makespan(), graph.len() as u32);

        let wide = graph.len();
        prop_assert_eq!(
            schedule_of(&graph, wide).makespan(),
            makespan_lower_bound(&graph, wide)
        );
    }

    #[test]
    fn test_scheduling_is_deterministic(
        parents in parents_strategy(20),
        orientation in orientation_strategy(),
        machines in 1..5usize,
    ) {
        let graph = forest_from_parents(&parents, orientation);

        let first = schedule_of(&graph, machines);
        let second = schedule_of(&graph, machines);
        prop_assert_eq!(first.to_string(), second.to_string());
    }
}
