//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for reading the source gINT database.
///
/// Distinguishing connection failures from read failures matters to callers:
/// [`GintDatabase::open`](crate::source::GintDatabase::open) only surfaces
/// connection errors, while
/// [`discover_tables`](crate::source::GintDatabase::discover_tables) and the
/// table readers surface catalog and read errors.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Error reported by the ODBC driver or driver manager.
    #[error("ODBC driver error: {0}")]
    OdbcError(#[from] odbc_api::Error),

    /// The driver executed the table query but produced no result set.
    #[error("Query for table `{0}` returned no result set")]
    NoResultSet(String),
}

/// Error types for the SQLite destination.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the destination database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for export operations.
///
/// Wraps the failure modes an export call can hit: reading the source,
/// serializing to CSV, filesystem I/O, and writing the SQLite destination.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Reading a table from the source failed.
    #[error("Source read error: {0}")]
    SourceError(#[from] SourceError),

    /// Writing CSV output failed.
    #[error("CSV write error: {0}")]
    CsvError(#[from] csv::Error),

    /// Filesystem operation (directory creation, file write) failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Writing to the SQLite destination failed.
    #[error(transparent)]
    DatabaseError(#[from] DatabaseError),
}
