// src/sample.rs

//! Built-in sample: a small house-construction project.

use chrono::NaiveDate;

use crate::dag::{Project, TaskGraph};
use crate::errors::{GanttdagError, Result};

/// Five tasks, one chain that forks after the walls:
///
/// ```text
/// site (3) -> foundation (5) -> walls (10) -> roof (7)
///                                          \-> finishing (15)
/// ```
///
/// Starts on 2024-01-15 with a planned end of 2024-05-15.
pub fn sample_project() -> Result<(TaskGraph, Project)> {
    let mut graph = TaskGraph::new();

    let site = graph.create_task(
        "Site preparation",
        "Clearing and levelling the plot",
        3,
        &[],
    )?;
    let foundation = graph.create_task("Foundation", "Pouring the foundation", 5, &[site])?;
    let walls = graph.create_task("Walls", "Raising the walls", 10, &[foundation])?;
    let roof = graph.create_task("Roof", "Installing the roof", 7, &[walls])?;
    let finishing = graph.create_task(
        "Finishing",
        "Interior and exterior finishing",
        15,
        &[walls],
    )?;

    let mut project = Project::new(
        "House construction",
        "One-storey house with an attic",
        date(2024, 1, 15)?,
        Some(date(2024, 5, 15)?),
    );
    for id in [site, foundation, walls, roof, finishing] {
        project.add_task(id);
    }

    Ok((graph, project))
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        GanttdagError::ConfigError(format!("invalid date {year}-{month:02}-{day:02}"))
    })
}
