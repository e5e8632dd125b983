// src/config/mod.rs

//! Project file loading and validation for ganttdag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a project file from disk (`loader.rs`).
//! - Validate dates, names and DAG correctness (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_project, parse_str};
pub use model::{
    LoadedProject, ProjectFile, ProjectMeta, ProjectSection, RawProjectFile, TaskConfig,
};
