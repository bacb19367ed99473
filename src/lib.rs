//! gint_extract library: gINT database export functionality
//!
//! This library opens a gINT (Access format) geotechnical database through an
//! ODBC connection, discovers its non-empty user tables, and exports each of
//! them either to per-table CSV files or into a single SQLite database.
//!
//! # Example
//!
//! ```no_run
//! use gint_extract::{run_export, Config, ExportFormat};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file_path: PathBuf::from("project.gpj"),
//!     format: ExportFormat::Sqlite,
//!     dir: PathBuf::from("project.db"),
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! println!("Exported {} tables ({} rows)", report.tables_exported, report.rows_exported);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Reading the source database requires an ODBC driver manager and the
//! Microsoft Access driver. The SQLite export path requires a Tokio runtime;
//! use `#[tokio::main]` or call library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod source;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use export::{ExportFormat, OnTableError};
pub use run::{run_export, ExportReport};
pub use source::{GintDatabase, TableSnapshot};

// Internal run module (contains the export pipeline)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::export::{self, ExportFormat, ExportStats};
    use crate::source::GintDatabase;

    /// Results of a completed export run.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Number of tables written to the destination
        pub tables_exported: usize,
        /// Total number of rows written across all tables
        pub rows_exported: usize,
        /// Number of tables skipped after read/write failures (`--on-table-error skip`)
        pub tables_skipped: usize,
        /// Output directory (CSV mode) or destination database file (SQLite mode)
        pub destination: PathBuf,
        /// Format the export was written in
        pub format: ExportFormat,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a full export with the provided configuration.
    ///
    /// This is the main entry point for the library. It opens the source
    /// database, discovers its non-empty user tables, and writes each of them
    /// to the configured destination, one table at a time in discovery order.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the export (source path, destination,
    ///   format, per-table error policy)
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be opened, if table discovery
    /// fails, or if an export step fails while the policy is
    /// [`OnTableError::Abort`](crate::export::OnTableError::Abort).
    pub async fn run_export(config: Config) -> Result<ExportReport> {
        let start = Instant::now();

        let mut database = GintDatabase::open(&config.file_path).with_context(|| {
            format!(
                "Failed to open source database {}",
                config.file_path.display()
            )
        })?;
        database
            .discover_tables()
            .context("Failed to enumerate tables in the source database")?;

        info!(
            "Source {} has {} user tables, {} non-empty",
            config.file_path.display(),
            database.table_names().len(),
            database.non_empty_tables().len()
        );

        let stats: ExportStats = match config.format {
            ExportFormat::Csv => {
                export::write_all_tables_to_csv(&database, &config.dir, config.on_table_error)
                    .with_context(|| format!("CSV export to {} failed", config.dir.display()))?
            }
            ExportFormat::Sqlite => {
                export::write_all_tables_to_sqlite(&database, &config.dir, config.on_table_error)
                    .await
                    .with_context(|| format!("SQLite export to {} failed", config.dir.display()))?
            }
        };

        Ok(ExportReport {
            tables_exported: stats.tables_exported,
            rows_exported: stats.rows_exported,
            tables_skipped: stats.tables_skipped,
            destination: config.dir,
            format: config.format,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
