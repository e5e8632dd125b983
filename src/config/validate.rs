// src/config/validate.rs

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::config::model::{ProjectFile, ProjectMeta, RawProjectFile, build_graph};
use crate::errors::{GanttdagError, Result};

impl TryFrom<RawProjectFile> for ProjectFile {
    type Error = crate::errors::GanttdagError;

    fn try_from(raw: RawProjectFile) -> std::result::Result<Self, Self::Error> {
        let project = validate_project_section(&raw)?;
        ensure_has_tasks(&raw)?;
        validate_task_names(&raw)?;
        validate_task_dependencies(&raw)?;
        validate_dag(&raw)?;
        Ok(ProjectFile::new_unchecked(project, raw.task))
    }
}

fn validate_project_section(cfg: &RawProjectFile) -> Result<ProjectMeta> {
    let section = &cfg.project;

    if section.name.trim().is_empty() {
        return Err(GanttdagError::ConfigError(
            "[project].name must not be empty".to_string(),
        ));
    }

    let start_date = parse_date("start_date", &section.start_date)?;
    let end_date = section
        .end_date
        .as_deref()
        .map(|s| parse_date("end_date", s))
        .transpose()?;

    if let Some(end) = end_date {
        if end < start_date {
            return Err(GanttdagError::ConfigError(format!(
                "[project].end_date {} is before start_date {}",
                end, start_date
            )));
        }
    }

    Ok(ProjectMeta {
        name: section.name.clone(),
        description: section.description.clone(),
        start_date,
        end_date,
    })
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        GanttdagError::ConfigError(format!(
            "[project].{} must be a YYYY-MM-DD date (got '{}'): {}",
            field, value, e
        ))
    })
}

fn ensure_has_tasks(cfg: &RawProjectFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(GanttdagError::ConfigError(
            "project file must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

/// Names are the reference used by `after`, so they must be unique here even
/// though the in-memory model allows duplicates.
fn validate_task_names(cfg: &RawProjectFile) -> Result<()> {
    let mut seen = HashSet::new();
    for task in cfg.task.iter() {
        if task.name.trim().is_empty() {
            return Err(GanttdagError::InvalidTask(
                "task name must not be empty".to_string(),
            ));
        }
        if !seen.insert(task.name.as_str()) {
            return Err(GanttdagError::ConfigError(format!(
                "duplicate task name '{}'",
                task.name
            )));
        }
        if task.duration < 0 {
            return Err(GanttdagError::InvalidTask(format!(
                "task '{}' has negative duration {}",
                task.name, task.duration
            )));
        }
    }
    Ok(())
}

fn validate_task_dependencies(cfg: &RawProjectFile) -> Result<()> {
    let names: HashSet<&str> = cfg.task.iter().map(|t| t.name.as_str()).collect();

    for task in cfg.task.iter() {
        for dep in task.after.iter() {
            if !names.contains(dep.as_str()) {
                return Err(GanttdagError::UnknownDependency {
                    task: task.name.clone(),
                    dependency: dep.clone(),
                });
            }
            if dep == &task.name {
                return Err(GanttdagError::InvalidTask(format!(
                    "task '{}' cannot depend on itself in `after`",
                    task.name
                )));
            }
        }
    }
    Ok(())
}

/// Build the task graph and run the same validation the scheduler uses, so a
/// cyclic file is rejected at load time with the cycle spelled out.
fn validate_dag(cfg: &RawProjectFile) -> Result<()> {
    let (graph, ids) = build_graph(&cfg.task)?;
    graph.topological_order(&cfg.project.name, &ids)?;
    Ok(())
}
