// tests/output_formats.rs
mod common;
use crate::common::{TestResult, init_tracing, ymd};

use ganttdag::dag::ScheduleRecord;
use ganttdag::output::{OutputFormat, write_schedule};

fn records() -> Vec<ScheduleRecord> {
    vec![
        ScheduleRecord {
            task_name: "Foundation".to_string(),
            start: ymd(2024, 1, 18),
            finish: ymd(2024, 1, 23),
            group: "Foundation".to_string(),
        },
        ScheduleRecord {
            task_name: "Roof".to_string(),
            start: ymd(2024, 2, 2),
            finish: ymd(2024, 2, 9),
            group: "Shell".to_string(),
        },
    ]
}

fn render(format: OutputFormat) -> Result<String, Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    write_schedule(&mut buf, &records(), format)?;
    Ok(String::from_utf8(buf)?)
}

#[test]
fn csv_has_header_and_iso_dates() -> TestResult {
    init_tracing();

    let out = render(OutputFormat::Csv)?;
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(
        lines,
        vec![
            "task_name,start,finish,group",
            "Foundation,2024-01-18,2024-01-23,Foundation",
            "Roof,2024-02-02,2024-02-09,Shell",
        ]
    );

    Ok(())
}

#[test]
fn json_uses_record_field_names() -> TestResult {
    init_tracing();

    let out = render(OutputFormat::Json)?;
    let value: serde_json::Value = serde_json::from_str(&out)?;

    let rows = value.as_array().ok_or("expected a JSON array")?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["task_name"], "Roof");
    assert_eq!(rows[1]["start"], "2024-02-02");
    assert_eq!(rows[1]["finish"], "2024-02-09");
    assert_eq!(rows[1]["group"], "Shell");

    Ok(())
}

#[test]
fn table_aligns_columns_to_the_longest_name() -> TestResult {
    init_tracing();

    let out = render(OutputFormat::Table)?;
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("TASK        START"));
    assert_eq!(lines[2], "Roof        2024-02-02  2024-02-09  Shell");

    Ok(())
}

#[test]
fn empty_table_still_has_a_header() -> TestResult {
    init_tracing();

    let mut buf = Vec::new();
    write_schedule(&mut buf, &[], OutputFormat::Table)?;
    let out = String::from_utf8(buf)?;

    assert!(out.starts_with("TASK"));
    assert_eq!(out.lines().count(), 1);

    Ok(())
}

#[test]
fn empty_csv_still_has_a_header() -> TestResult {
    init_tracing();

    let mut buf = Vec::new();
    write_schedule(&mut buf, &[], OutputFormat::Csv)?;
    let out = String::from_utf8(buf)?;

    assert_eq!(out, "task_name,start,finish,group\n");

    Ok(())
}
