// src/dag/scheduler.rs

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use tracing::{debug, info, warn};

use crate::dag::graph::TaskGraph;
use crate::dag::project::Project;
use crate::dag::schedule::{Schedule, ScheduleRecord, ScheduledTask};
use crate::dag::task::TaskId;
use crate::errors::{GanttdagError, Result};

/// Forward (earliest-start) scheduler over a [`TaskGraph`].
///
/// The scheduler is stateless apart from optional grouping keys for the
/// output table, so one instance can schedule any number of projects. The
/// graph is only borrowed immutably; the sole mutation is the project's
/// `end_date`, and only after validation has passed.
///
/// Each run has two passes:
/// 1. validate the dependency closure of the project (unknown references,
///    cycles) and obtain a topological order;
/// 2. walk that order once, assigning earliest dates and chain durations.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    groups: HashMap<TaskId, String>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `group` as the grouping key for `task` in the output table.
    pub fn with_group(mut self, task: TaskId, group: impl Into<String>) -> Self {
        self.set_group(task, group);
        self
    }

    pub fn set_group(&mut self, task: TaskId, group: impl Into<String>) {
        self.groups.insert(task, group.into());
    }

    /// Schedule `project` and overwrite its `end_date` with the result.
    ///
    /// On error the project is left untouched.
    pub fn schedule(&self, graph: &TaskGraph, project: &mut Project) -> Result<Schedule> {
        let schedule = self.plan(graph, project)?;

        project.end_date = Some(schedule.end_date);
        info!(
            project = %project.name,
            tasks = schedule.records.len(),
            end_date = %schedule.end_date,
            "project scheduled"
        );

        Ok(schedule)
    }

    /// Compute the schedule without touching the project.
    pub fn plan(&self, graph: &TaskGraph, project: &Project) -> Result<Schedule> {
        let order = graph.topological_order(&project.name, project.tasks())?;
        debug!(
            project = %project.name,
            closure = order.len(),
            "dependency graph validated"
        );

        let chains = chain_durations_in_order(graph, &order);
        let dates = propagate_dates(graph, &order, project.start_date)?;

        let mut tasks = HashMap::with_capacity(order.len());
        for &id in &order {
            let (start, finish) = dates[id.index()].ok_or_else(|| missing(graph, project, id))?;
            tasks.insert(
                id,
                ScheduledTask {
                    id,
                    start,
                    finish,
                    chain_duration: chains[id.index()],
                },
            );
        }

        let mut records = Vec::with_capacity(project.len());
        for &id in project.tasks() {
            let scheduled = tasks.get(&id).ok_or_else(|| missing(graph, project, id))?;
            let task_name = graph.display_name(id);
            let group = self
                .groups
                .get(&id)
                .cloned()
                .unwrap_or_else(|| task_name.clone());
            records.push(ScheduleRecord {
                task_name,
                start: scheduled.start,
                finish: scheduled.finish,
                group,
            });
        }

        let end_date = records
            .iter()
            .map(|r| r.finish)
            .max()
            .unwrap_or(project.start_date);

        let critical_path_days = project
            .tasks()
            .iter()
            .map(|id| chains[id.index()])
            .max()
            .unwrap_or(0);
        let chain_end_date = add_days(project.start_date, critical_path_days, &project.name)?;

        if chain_end_date != end_date {
            warn!(
                project = %project.name,
                %end_date,
                %chain_end_date,
                "propagated end date differs from longest-chain end date"
            );
        }

        Ok(Schedule {
            records,
            tasks,
            end_date,
            chain_end_date,
            critical_path_days,
        })
    }

    /// Longest chain duration for every task the project depends on, keyed
    /// by task id.
    pub fn chain_durations(
        &self,
        graph: &TaskGraph,
        project: &Project,
    ) -> Result<HashMap<TaskId, u64>> {
        let order = graph.topological_order(&project.name, project.tasks())?;
        let chains = chain_durations_in_order(graph, &order);
        Ok(order.into_iter().map(|id| (id, chains[id.index()])).collect())
    }

    /// Project start plus the longest chain duration over the project's tasks.
    pub fn longest_chain_end(&self, graph: &TaskGraph, project: &Project) -> Result<NaiveDate> {
        let chains = self.chain_durations(graph, project)?;
        let longest = project
            .tasks()
            .iter()
            .filter_map(|id| chains.get(id).copied())
            .max()
            .unwrap_or(0);
        add_days(project.start_date, longest, &project.name)
    }
}

/// Chain duration per arena slot, filled for every id in `order`.
///
/// `order` must be topological, so each dependency is final by the time its
/// dependents read it; every task is visited exactly once.
fn chain_durations_in_order(graph: &TaskGraph, order: &[TaskId]) -> Vec<u64> {
    let mut chains = vec![0u64; graph.len()];
    for &id in order {
        let longest_dep = graph
            .dependencies_of(id)
            .iter()
            .map(|dep| chains[dep.index()])
            .max()
            .unwrap_or(0);
        let own = graph.get(id).map(|t| u64::from(t.duration())).unwrap_or(0);
        chains[id.index()] = own + longest_dep;
    }
    chains
}

/// Earliest (start, finish) per arena slot, filled for every id in `order`.
fn propagate_dates(
    graph: &TaskGraph,
    order: &[TaskId],
    project_start: NaiveDate,
) -> Result<Vec<Option<(NaiveDate, NaiveDate)>>> {
    let mut dates: Vec<Option<(NaiveDate, NaiveDate)>> = vec![None; graph.len()];

    for &id in order {
        let Some(task) = graph.get(id) else {
            continue;
        };

        // Latest finish among all predecessors, or the project start.
        let start = task
            .dependencies()
            .iter()
            .filter_map(|dep| dates[dep.index()].map(|(_, finish)| finish))
            .max()
            .unwrap_or(project_start);
        let finish = add_days(start, u64::from(task.duration()), task.name())?;

        debug!(task = %task.name(), %start, %finish, "scheduled task");
        dates[id.index()] = Some((start, finish));
    }

    Ok(dates)
}

fn add_days(date: NaiveDate, days: u64, task: &str) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| GanttdagError::DateOutOfRange {
            task: task.to_string(),
        })
}

fn missing(graph: &TaskGraph, project: &Project, id: TaskId) -> GanttdagError {
    GanttdagError::UnknownDependency {
        task: project.name.clone(),
        dependency: graph.display_name(id),
    }
}
