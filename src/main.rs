//! CLI entry point for the developer performance report tool.
//!
//! Loads one or more developer CSV files, aggregates average performance per
//! position, and prints a ranked grid table to the console. Unreadable input
//! files are warned about and skipped.

use anyhow::Result;
use clap::Parser;
use perf_report::loader::load_records;
use perf_report::model::Developer;
use perf_report::output::present;
use perf_report::reports::ReportKind;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "perf_report")]
#[command(about = "Performance report generator for developer CSV data", long_about = None)]
struct Cli {
    /// Input CSV files
    #[arg(long, required = true, num_args = 1.., value_name = "FILE")]
    files: Vec<String>,

    /// Report to generate
    #[arg(long, value_enum, default_value = "performance")]
    report: ReportKind,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/perf_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("perf_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let mut records: Vec<Developer> = Vec::new();
    for file in &cli.files {
        match load_records(file) {
            Ok(mut loaded) => {
                info!(file = %file, records = loaded.len(), "Input file loaded");
                records.append(&mut loaded);
            }
            Err(e) => {
                warn!(file = %file, error = %e, "Skipping input file");
            }
        }
    }

    if records.is_empty() {
        // Report still renders, just with headers and no rows
        warn!("No records loaded from any input file; report will be empty");
    }

    let report = cli.report.generate(&records);
    present(&report, None)?;

    Ok(())
}
