// tests/house_schedule.rs
mod common;
use crate::common::builders::{BuiltProject, ProjectBuilder};
use crate::common::{TestResult, init_tracing, ymd};

use ganttdag::dag::Scheduler;
use ganttdag::sample::sample_project;

fn house() -> BuiltProject {
    ProjectBuilder::new(ymd(2024, 1, 15))
        .task("T1", 3, &[])
        .task("T2", 5, &["T1"])
        .task("T3", 10, &["T2"])
        .task("T4", 7, &["T3"])
        .task("T5", 15, &["T3"])
        .build()
}

#[test]
fn chain_with_fork_gets_expected_dates() -> TestResult {
    init_tracing();

    let BuiltProject {
        graph, mut project, ..
    } = house();
    let schedule = Scheduler::new().schedule(&graph, &mut project)?;

    let rows: Vec<(&str, _, _)> = schedule
        .records
        .iter()
        .map(|r| (r.task_name.as_str(), r.start, r.finish))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("T1", ymd(2024, 1, 15), ymd(2024, 1, 18)),
            ("T2", ymd(2024, 1, 18), ymd(2024, 1, 23)),
            ("T3", ymd(2024, 1, 23), ymd(2024, 2, 2)),
            ("T4", ymd(2024, 2, 2), ymd(2024, 2, 9)),
            ("T5", ymd(2024, 2, 2), ymd(2024, 2, 17)),
        ]
    );

    Ok(())
}

#[test]
fn project_end_date_is_overwritten_with_latest_finish() -> TestResult {
    init_tracing();

    let BuiltProject {
        graph, mut project, ..
    } = house();
    project.end_date = Some(ymd(2024, 5, 15));

    let schedule = Scheduler::new().schedule(&graph, &mut project)?;

    assert_eq!(schedule.end_date, ymd(2024, 2, 17));
    assert_eq!(project.end_date, Some(ymd(2024, 2, 17)));

    Ok(())
}

#[test]
fn longest_chain_end_follows_the_longest_dependency_path() -> TestResult {
    init_tracing();

    let built = house();
    let scheduler = Scheduler::new();

    // T1 + T2 + T3 + T5 = 3 + 5 + 10 + 15 days.
    let chains = scheduler.chain_durations(&built.graph, &built.project)?;
    assert_eq!(chains[&built.id("T1")], 3);
    assert_eq!(chains[&built.id("T3")], 18);
    assert_eq!(chains[&built.id("T4")], 25);
    assert_eq!(chains[&built.id("T5")], 33);

    let end = scheduler.longest_chain_end(&built.graph, &built.project)?;
    assert_eq!(end, ymd(2024, 2, 17));

    let schedule = scheduler.plan(&built.graph, &built.project)?;
    assert_eq!(schedule.critical_path_days, 33);
    assert_eq!(schedule.chain_end_date, schedule.end_date);

    Ok(())
}

#[test]
fn scheduling_twice_is_idempotent() -> TestResult {
    init_tracing();

    let BuiltProject {
        graph, mut project, ..
    } = house();
    let scheduler = Scheduler::new();

    let first = scheduler.schedule(&graph, &mut project)?;
    let second = scheduler.schedule(&graph, &mut project)?;

    assert_eq!(first, second);
    assert_eq!(project.end_date, Some(first.end_date));

    Ok(())
}

#[test]
fn built_in_sample_matches_the_house_scenario() -> TestResult {
    init_tracing();

    let (graph, mut project) = sample_project()?;
    assert_eq!(project.end_date, Some(ymd(2024, 5, 15)));

    let schedule = Scheduler::new().schedule(&graph, &mut project)?;

    let names: Vec<&str> = schedule
        .records
        .iter()
        .map(|r| r.task_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Site preparation", "Foundation", "Walls", "Roof", "Finishing"]
    );
    assert_eq!(schedule.records[4].start, ymd(2024, 2, 2));
    assert_eq!(schedule.records[4].finish, ymd(2024, 2, 17));
    assert_eq!(project.end_date, Some(ymd(2024, 2, 17)));

    // Group defaults to the task name.
    assert!(schedule.records.iter().all(|r| r.group == r.task_name));

    Ok(())
}
