use std::collections::BTreeSet;

use chrono::Days;
use proptest::prelude::*;

use ganttdag::dag::{Project, Scheduler, TaskGraph, TaskId};
use ganttdag_test_utils::ymd;

// Strategy to generate a valid DAG: (duration, raw dependency indices) per task.
// We ensure acyclicity by only allowing task N to depend on tasks 0..N-1.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<(u32, Vec<usize>)>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        proptest::collection::vec(
            (0u32..30, proptest::collection::vec(any::<usize>(), 0..4)),
            num_tasks,
        )
    })
}

fn build(dag: &[(u32, Vec<usize>)]) -> (TaskGraph, Project, Vec<TaskId>) {
    let mut graph = TaskGraph::new();
    let mut project = Project::new("prop", "", ymd(2024, 1, 1), None);
    let mut ids: Vec<TaskId> = Vec::new();

    for (i, (duration, raw_deps)) in dag.iter().enumerate() {
        // Sanitize dependencies: only allow deps < i
        let deps: BTreeSet<usize> = if i == 0 {
            BTreeSet::new()
        } else {
            raw_deps.iter().map(|d| d % i).collect()
        };
        let deps: Vec<TaskId> = deps.into_iter().map(|d| ids[d]).collect();

        let id = graph
            .create_task(format!("task_{i}"), "", i64::from(*duration), &deps)
            .unwrap();
        project.add_task(id);
        ids.push(id);
    }

    (graph, project, ids)
}

proptest! {
    #[test]
    fn earliest_dates_respect_every_dependency(dag in dag_strategy(25)) {
        let (graph, mut project, ids) = build(&dag);
        let schedule = Scheduler::new().schedule(&graph, &mut project).unwrap();

        prop_assert_eq!(schedule.records.len(), ids.len());

        for &id in &ids {
            let task = graph.get(id).unwrap();
            let st = schedule.get(id).unwrap();

            let expected_start = task
                .dependencies()
                .iter()
                .map(|dep| schedule.get(*dep).unwrap().finish)
                .max()
                .unwrap_or(project.start_date);

            prop_assert_eq!(st.start, expected_start);
            prop_assert_eq!(st.finish, st.start + Days::new(u64::from(task.duration())));
        }
    }

    #[test]
    fn longest_chain_end_equals_propagated_end(dag in dag_strategy(25)) {
        let (graph, project, _ids) = build(&dag);
        let scheduler = Scheduler::new();

        let schedule = scheduler.plan(&graph, &project).unwrap();
        let chain_end = scheduler.longest_chain_end(&graph, &project).unwrap();

        prop_assert_eq!(chain_end, schedule.chain_end_date);
        prop_assert_eq!(chain_end, schedule.end_date);
    }

    #[test]
    fn scheduling_is_idempotent(dag in dag_strategy(15)) {
        let (graph, mut project, _ids) = build(&dag);
        let scheduler = Scheduler::new();

        let first = scheduler.schedule(&graph, &mut project).unwrap();
        let second = scheduler.schedule(&graph, &mut project).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn closing_any_back_edge_is_detected(dag in dag_strategy(15), pick in any::<usize>()) {
        let (mut graph, project, ids) = build(&dag);

        // Find a task with a dependency and make that dependency wait for it.
        let with_dep: Vec<TaskId> = ids
            .iter()
            .copied()
            .filter(|&id| !graph.dependencies_of(id).is_empty())
            .collect();
        prop_assume!(!with_dep.is_empty());

        let task = with_dep[pick % with_dep.len()];
        let dep = graph.dependencies_of(task)[0];
        graph.add_dependency(dep, task).unwrap();

        let result = Scheduler::new().plan(&graph, &project);
        let is_cycle = matches!(
            result,
            Err(ganttdag::errors::GanttdagError::CyclicDependency { .. })
        );
        prop_assert!(is_cycle);
    }
}
