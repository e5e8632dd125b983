// src/output.rs

//! Writers for the schedule table.
//!
//! The table is the only thing handed to external renderers, so the formats
//! here are deliberately flat: one row per task with name, start, finish and
//! group. Dates are written as `YYYY-MM-DD`.

use std::io::Write;

use clap::ValueEnum;

use crate::dag::ScheduleRecord;
use crate::errors::Result;

/// Output format for the schedule table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable columns.
    #[default]
    Table,
    /// Comma-separated values with a header row.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

/// Write `records` to `writer` in the requested format.
pub fn write_schedule<W: Write>(
    writer: W,
    records: &[ScheduleRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(writer, records),
        OutputFormat::Csv => write_csv(writer, records),
        OutputFormat::Json => write_json(writer, records),
    }
}

fn write_table<W: Write>(mut writer: W, records: &[ScheduleRecord]) -> Result<()> {
    let name_width = records
        .iter()
        .map(|r| r.task_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("TASK".len());

    writeln!(
        writer,
        "{:<name_width$}  {:<10}  {:<10}  GROUP",
        "TASK", "START", "FINISH"
    )?;
    for r in records {
        writeln!(
            writer,
            "{:<name_width$}  {}  {}  {}",
            r.task_name,
            r.start.format("%Y-%m-%d"),
            r.finish.format("%Y-%m-%d"),
            r.group
        )?;
    }
    writer.flush()?;
    Ok(())
}

const CSV_HEADER: [&str; 4] = ["task_name", "start", "finish", "group"];

fn write_csv<W: Write>(writer: W, records: &[ScheduleRecord]) -> Result<()> {
    // Header is written by hand so an empty schedule still gets one.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json<W: Write>(mut writer: W, records: &[ScheduleRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
