//! Export types and options.

use clap::ValueEnum;

/// Export format options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One CSV file per table in an output directory
    Csv,
    /// All tables in a single SQLite database file
    Sqlite,
}

/// Policy for a table that fails to read or write mid-export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OnTableError {
    /// Abort the whole run on the first failing table (default)
    Abort,
    /// Log a warning, skip the table, and continue with the rest
    Skip,
}

/// Counters accumulated over one export run.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExportStats {
    /// Tables written to the destination
    pub tables_exported: usize,
    /// Rows written across all exported tables
    pub rows_exported: usize,
    /// Tables skipped under [`OnTableError::Skip`]
    pub tables_skipped: usize,
}
