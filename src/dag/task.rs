// src/dag/task.rs

//! Task definitions stored in the [`TaskGraph`](crate::dag::TaskGraph) arena.

use std::fmt;

use crate::dag::TaskName;

/// Stable identifier of a task: the owning graph plus the task's index in
/// that graph's arena.
///
/// Distinct from the display name, so two tasks may share a name without
/// making dependency references ambiguous. An id only resolves in the graph
/// that issued it (or a clone of that graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId {
    pub(crate) graph: u64,
    pub(crate) index: usize,
}

impl TaskId {
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Immutable task definition.
///
/// Computed dates are never stored here; they live in
/// [`ScheduledTask`](crate::dag::ScheduledTask) records produced by the
/// scheduler. The only mutable bits are the dependency set (which can grow
/// through [`TaskGraph::add_dependency`](crate::dag::TaskGraph::add_dependency))
/// and the caller-owned `completed` flag.
#[derive(Debug, Clone)]
pub struct Task {
    pub(crate) id: TaskId,
    pub(crate) name: TaskName,
    pub(crate) description: String,
    /// Duration in whole days.
    pub(crate) duration: u32,
    /// Direct predecessors, in the order they were added.
    pub(crate) deps: Vec<TaskId>,
    pub(crate) completed: bool,
}

impl Task {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn dependencies(&self) -> &[TaskId] {
        &self.deps
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(name='{}', duration={}, completed={})",
            self.name, self.duration, self.completed
        )
    }
}
