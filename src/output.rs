//! Report presentation: console grid table or flat-file output.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use tracing::debug;

use crate::reports::performance::ReportRow;

/// Writes the report to `destination`, or prints it as a grid table to
/// stdout when no destination is given. Rows are emitted in the order the
/// report produced them.
///
/// # Errors
///
/// Returns an error if the destination file cannot be written. Console
/// output cannot fail.
pub fn present(rows: &[ReportRow], destination: Option<&str>) -> Result<()> {
    match destination {
        Some(path) => write_report(path, rows),
        None => {
            print_table(rows);
            Ok(())
        }
    }
}

/// Writes the report as plain text, overwriting `path`: a
/// `Position, Average Performance` header line, then one
/// `{position}, {average}` line per row.
pub fn write_report(path: &str, rows: &[ReportRow]) -> Result<()> {
    debug!(path, rows = rows.len(), "Writing report file");

    let mut contents = String::from("Position, Average Performance\n");
    for row in rows {
        // f64 Display keeps the rounded value short: 4.70 prints as 4.7
        let _ = writeln!(contents, "{}, {}", row.position, row.average_performance);
    }

    fs::write(path, contents).with_context(|| format!("cannot write report to '{}'", path))?;
    Ok(())
}

/// Prints the report to stdout as a bordered grid table.
pub fn print_table(rows: &[ReportRow]) {
    println!("{}", render_table(rows));
}

/// Renders the report as a bordered grid table.
///
/// An empty report still renders the header cells, just with no data rows.
pub fn render_table(rows: &[ReportRow]) -> String {
    const HEADERS: (&str, &str) = ("Position", "Average Performance");

    let formatted: Vec<(&str, String)> = rows
        .iter()
        .map(|r| (r.position.as_str(), r.average_performance.to_string()))
        .collect();

    let pos_width = formatted
        .iter()
        .map(|(pos, _)| pos.len())
        .chain([HEADERS.0.len()])
        .max()
        .unwrap_or(0);
    let avg_width = formatted
        .iter()
        .map(|(_, avg)| avg.len())
        .chain([HEADERS.1.len()])
        .max()
        .unwrap_or(0);

    let border = |fill: char| {
        format!(
            "+{}+{}+",
            fill.to_string().repeat(pos_width + 2),
            fill.to_string().repeat(avg_width + 2)
        )
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", border('-'));
    let _ = writeln!(
        out,
        "| {:<pos_width$} | {:>avg_width$} |",
        HEADERS.0, HEADERS.1
    );
    let _ = writeln!(out, "{}", border('='));

    for (position, average) in &formatted {
        let _ = writeln!(out, "| {:<pos_width$} | {:>avg_width$} |", position, average);
        let _ = writeln!(out, "{}", border('-'));
    }

    let _ = out.pop(); // drop the trailing newline, println adds one back
    out
}
