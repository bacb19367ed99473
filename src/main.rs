//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `gint_extract` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use gint_extract::initialization::init_logger_with;
use gint_extract::{run_export, Config, ExportFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config.
    // An unsupported --format or --on-table-error value is a clap usage
    // error here: diagnostic on stderr, non-zero exit.
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_export(config).await {
        Ok(report) => {
            let what = match report.format {
                ExportFormat::Csv => "CSV files",
                ExportFormat::Sqlite => "SQLite database",
            };
            println!(
                "✅ Exported {} table{} ({} row{}{}) to {} in {:.1}s",
                report.tables_exported,
                if report.tables_exported == 1 { "" } else { "s" },
                report.rows_exported,
                if report.rows_exported == 1 { "" } else { "s" },
                if report.tables_skipped > 0 {
                    format!(", {} table(s) skipped", report.tables_skipped)
                } else {
                    String::new()
                },
                what,
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.destination.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("gint_extract error: {:#}", e);
            process::exit(1);
        }
    }
}
