// src/dag/mod.rs

//! Task graph model and scheduling.
//!
//! - [`task`] defines immutable task definitions and their ids.
//! - [`graph`] holds the task arena, dependency edges and validation
//!   (unknown references, cycles, topological order).
//! - [`project`] groups tasks into an ordered project with a start date.
//! - [`scheduler`] computes earliest dates and chain durations.
//! - [`schedule`] provides the result types handed to renderers.

/// Canonical task name type used throughout the crate.
pub type TaskName = String;

pub mod graph;
pub mod project;
pub mod schedule;
pub mod scheduler;
pub mod task;

pub use graph::TaskGraph;
pub use project::Project;
pub use schedule::{Schedule, ScheduleRecord, ScheduledTask};
pub use scheduler::Scheduler;
pub use task::{Task, TaskId};
