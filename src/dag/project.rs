// src/dag/project.rs

use std::fmt;

use chrono::NaiveDate;

use crate::dag::task::TaskId;

/// A project: metadata plus an ordered list of tasks from a [`TaskGraph`].
///
/// Insertion order only determines output order; it has no effect on the
/// computed dates.
///
/// [`TaskGraph`]: crate::dag::TaskGraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    /// Provided at construction, overwritten by each successful scheduling run.
    pub end_date: Option<NaiveDate>,
    tasks: Vec<TaskId>,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            start_date,
            end_date,
            tasks: Vec::new(),
        }
    }

    /// Append a task. No uniqueness check is made.
    pub fn add_task(&mut self, task: TaskId) {
        self.tasks.push(task);
    }

    pub fn tasks(&self) -> &[TaskId] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Project(name='{}', start_date={}, end_date={}, tasks={})",
            self.name,
            self.start_date,
            self.end_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "unset".to_string()),
            self.tasks.len()
        )
    }
}
