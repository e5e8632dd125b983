// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{LoadedProject, ProjectFile, RawProjectFile};
use crate::errors::Result;

/// Load a project file from a given path and return the raw `RawProjectFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (dates, names, DAG correctness). Use [`load_and_validate`] for
/// that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawProjectFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_str(&contents)
}

/// Parse a project file from a TOML string without validating it.
pub fn parse_str(contents: &str) -> Result<RawProjectFile> {
    let config: RawProjectFile = toml::from_str(contents)?;
    Ok(config)
}

/// Load a project file from path and validate it.
///
/// Checks for:
/// - a parseable `start_date` (and `end_date`, if given),
/// - unique, non-empty task names and non-negative durations,
/// - unknown `after` references,
/// - dependency cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ProjectFile> {
    let path = path.as_ref();
    let raw = load_from_path(path)?;
    let config = ProjectFile::try_from(raw)?;
    debug!(path = ?path, tasks = config.tasks().len(), "loaded project file");
    Ok(config)
}

/// Load, validate and build the task graph in one step.
pub fn load_project(path: impl AsRef<Path>) -> Result<LoadedProject> {
    load_and_validate(path)?.build()
}

/// Default project file path: `Ganttdag.toml` in the current working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Ganttdag.toml")
}
