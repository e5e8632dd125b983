// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod output;
pub mod sample;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{LoadedProject, default_config_path, load_project};
use crate::dag::{Project, Schedule, Scheduler, TaskGraph};
use crate::output::{OutputFormat, write_schedule};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - project loading (file or built-in sample)
/// - validation / dry-run output
/// - scheduling
/// - writing the schedule table
pub fn run(args: CliArgs) -> Result<()> {
    let LoadedProject {
        graph,
        mut project,
        scheduler,
    } = if args.sample {
        let (graph, project) = sample::sample_project()?;
        LoadedProject {
            graph,
            project,
            scheduler: Scheduler::new(),
        }
    } else {
        let path = args.config.clone().unwrap_or_else(default_config_path);
        load_project(&path).with_context(|| format!("loading project file {:?}", path))?
    };

    if args.dry_run {
        print_dry_run(&graph, &project);
        return Ok(());
    }

    let schedule = scheduler.schedule(&graph, &mut project)?;
    info!(
        project = %project.name,
        end_date = %schedule.end_date,
        chain_end_date = %schedule.chain_end_date,
        "schedule computed"
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {:?}", path))?;
            write_schedule(BufWriter::new(file), &schedule.records, args.format)?;
            debug!(path = ?path, "schedule written");
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_schedule(&mut out, &schedule.records, args.format)?;
            if args.format == OutputFormat::Table {
                print_summary(&mut out, &project, &schedule)?;
            }
        }
    }

    Ok(())
}

fn print_summary<W: Write>(mut out: W, project: &Project, schedule: &Schedule) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "project:           {}", project.name)?;
    writeln!(out, "start date:        {}", project.start_date)?;
    writeln!(out, "end date:          {}", schedule.end_date)?;
    writeln!(
        out,
        "longest chain:     {} days (ends {})",
        schedule.critical_path_days, schedule.chain_end_date
    )?;
    Ok(())
}

/// Simple dry-run output: print project metadata, tasks and dependencies.
fn print_dry_run(graph: &TaskGraph, project: &Project) {
    println!("ganttdag dry-run");
    println!("  project = {}", project.name);
    if !project.description.is_empty() {
        println!("  description = {}", project.description);
    }
    println!("  start_date = {}", project.start_date);
    if let Some(end) = project.end_date {
        println!("  end_date = {end} (planned)");
    }
    println!();

    println!("tasks ({}):", project.len());
    for &id in project.tasks() {
        let Some(task) = graph.get(id) else {
            continue;
        };
        println!("  - {}", task.name());
        println!("      duration: {} days", task.duration());
        if !task.dependencies().is_empty() {
            let after: Vec<String> = task
                .dependencies()
                .iter()
                .map(|&dep| graph.display_name(dep))
                .collect();
            println!("      after: {:?}", after);
        }
        if task.is_completed() {
            println!("      completed: true");
        }
    }

    debug!("dry-run complete (no scheduling)");
}
