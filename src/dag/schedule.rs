// src/dag/schedule.rs

//! Result types produced by the [`Scheduler`](crate::dag::Scheduler).

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dag::TaskName;
use crate::dag::task::TaskId;

/// Dates computed for one task in one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub id: TaskId,
    pub start: NaiveDate,
    pub finish: NaiveDate,
    /// Days along the longest dependency chain ending with this task,
    /// including its own duration.
    pub chain_duration: u64,
}

/// One row of the timeline table handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRecord {
    pub task_name: TaskName,
    pub start: NaiveDate,
    pub finish: NaiveDate,
    /// Grouping key for the renderer; the task name unless overridden.
    pub group: String,
}

/// Everything a single scheduling run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// One record per project entry, in insertion order.
    pub records: Vec<ScheduleRecord>,
    /// Dates for every task in the run, including dependencies that are not
    /// part of the project itself.
    pub tasks: HashMap<TaskId, ScheduledTask>,
    /// Latest finish date from earliest-date propagation.
    pub end_date: NaiveDate,
    /// Project start plus the longest chain duration.
    pub chain_end_date: NaiveDate,
    /// Longest chain duration among the project's tasks, in days.
    pub critical_path_days: u64,
}

impl Schedule {
    pub fn get(&self, id: TaskId) -> Option<&ScheduledTask> {
        self.tasks.get(&id)
    }
}
