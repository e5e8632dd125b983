// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::dag::TaskName;

#[derive(Error, Debug)]
pub enum GanttdagError {
    /// Malformed task attributes (negative duration, empty name, self-dependency).
    #[error("Invalid task: {0}")]
    InvalidTask(String),

    /// A dependency reference that cannot be resolved in the scheduling context.
    #[error("Unknown dependency: '{task}' depends on '{dependency}', which does not exist")]
    UnknownDependency {
        task: TaskName,
        dependency: TaskName,
    },

    /// The dependency relation contains a cycle.
    ///
    /// `cycle` lists task names in precedence order and repeats the first name
    /// at the end, so `["A", "B", "A"]` means A must finish before B, which
    /// must finish before A.
    #[error("Cyclic dependency: {}", .cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<TaskName> },

    #[error("Date out of range while scheduling task '{task}'")]
    DateOutOfRange { task: TaskName },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GanttdagError>;
