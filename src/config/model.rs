// src/config/model.rs

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::dag::{Project, Scheduler, TaskGraph, TaskId};
use crate::errors::{GanttdagError, Result};

/// Project file as read from TOML, before validation.
///
/// ```toml
/// [project]
/// name = "House"
/// description = "One-storey house with an attic"
/// start_date = "2024-01-15"
/// end_date = "2024-05-15"
///
/// [[task]]
/// name = "Site preparation"
/// duration = 3
///
/// [[task]]
/// name = "Foundation"
/// duration = 5
/// after = ["Site preparation"]
/// ```
///
/// Tasks are an array of tables so that file order is preserved; it becomes
/// the row order of the schedule table.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProjectFile {
    pub project: ProjectSection,

    #[serde(default)]
    pub task: Vec<TaskConfig>,
}

/// `[project]` section. Dates are `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub start_date: String,

    /// Planned end date; replaced by the computed one after scheduling.
    #[serde(default)]
    pub end_date: Option<String>,
}

/// One `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    /// Unique task name, also used in other tasks' `after` lists.
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Duration in days. Signed so that a negative value is reported as an
    /// invalid task rather than a TOML type error.
    pub duration: i64,

    /// Names of tasks that must finish before this one starts.
    #[serde(default)]
    pub after: Vec<String>,

    /// Grouping key for renderers; defaults to the task name.
    #[serde(default)]
    pub group: Option<String>,

    #[serde(default)]
    pub completed: bool,
}

/// Validated `[project]` metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMeta {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// A validated project file.
///
/// Only constructible through `TryFrom<RawProjectFile>` (see
/// `config::validate`), so task names are unique, every `after` reference
/// resolves and the dependency graph is acyclic.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    project: ProjectMeta,
    tasks: Vec<TaskConfig>,
}

/// Everything needed to run the scheduler on a loaded file.
#[derive(Debug, Clone)]
pub struct LoadedProject {
    pub graph: TaskGraph,
    pub project: Project,
    pub scheduler: Scheduler,
}

impl ProjectFile {
    pub(crate) fn new_unchecked(project: ProjectMeta, tasks: Vec<TaskConfig>) -> Self {
        Self { project, tasks }
    }

    pub fn project(&self) -> &ProjectMeta {
        &self.project
    }

    pub fn tasks(&self) -> &[TaskConfig] {
        &self.tasks
    }

    /// Turn the file into a task graph, a project and a scheduler carrying
    /// the per-task groups.
    pub fn build(&self) -> Result<LoadedProject> {
        let (graph, ids) = build_graph(&self.tasks)?;

        let mut project = Project::new(
            self.project.name.clone(),
            self.project.description.clone(),
            self.project.start_date,
            self.project.end_date,
        );
        let mut scheduler = Scheduler::new();

        for (task, &id) in self.tasks.iter().zip(ids.iter()) {
            project.add_task(id);
            if let Some(group) = &task.group {
                scheduler.set_group(id, group.clone());
            }
        }

        debug!(
            project = %project.name,
            tasks = project.len(),
            "built project from config"
        );

        Ok(LoadedProject {
            graph,
            project,
            scheduler,
        })
    }
}

/// Create one graph node per task entry, then wire `after` edges by name.
///
/// Returns the ids in file order. Names must already be unique.
pub(crate) fn build_graph(tasks: &[TaskConfig]) -> Result<(TaskGraph, Vec<TaskId>)> {
    let mut graph = TaskGraph::new();
    let mut ids = Vec::with_capacity(tasks.len());

    // First pass: nodes.
    for task in tasks {
        let id = graph.create_task(
            task.name.as_str(),
            task.description.as_str(),
            task.duration,
            &[],
        )?;
        if task.completed {
            graph.mark_complete(id);
        }
        ids.push(id);
    }

    // Second pass: edges.
    for (task, &id) in tasks.iter().zip(ids.iter()) {
        for dep in &task.after {
            let dep_id = graph
                .find_by_name(dep)
                .ok_or_else(|| GanttdagError::UnknownDependency {
                    task: task.name.clone(),
                    dependency: dep.clone(),
                })?;
            graph.add_dependency(id, dep_id)?;
        }
    }

    Ok((graph, ids))
}
