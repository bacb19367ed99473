//! Configuration types and CLI options.
//!
//! This module defines the enums and the struct used for command-line
//! argument parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_OUTPUT_DIR;
use crate::export::{ExportFormat, OnTableError};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field
/// attributes. All options except the source path have defaults and can be
/// overridden via command-line flags.
///
/// # Examples
///
/// ```bash
/// # Export every non-empty table to ./csv/<table>.csv
/// gint_extract project.gpj
///
/// # Export into a single SQLite file, skipping unreadable tables
/// gint_extract project.gpj --format sqlite --dir project.db --on-table-error skip
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gint_extract",
    about = "Exports the non-empty tables of a gINT (Access format) database to CSV files or a SQLite database."
)]
pub struct Config {
    /// Path to the gINT database file (.gpj, .mdb, or .accdb)
    #[arg(value_parser)]
    pub file_path: PathBuf,

    /// Output directory (CSV mode) or destination database file (SQLite mode)
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_DIR)]
    pub dir: PathBuf,

    /// Output format: csv|sqlite
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Policy when a single table fails to read or write: abort|skip
    #[arg(long, value_enum, default_value_t = OnTableError::Abort)]
    pub on_table_error: OnTableError,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_path: PathBuf::new(),
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: ExportFormat::Csv,
            on_table_error: OnTableError::Abort,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
