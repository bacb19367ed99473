//! Error types.
//!
//! This module defines the typed errors used throughout the crate:
//! - Initialization failures (logger setup)
//! - Source-side failures (ODBC connection, catalog, table reads)
//! - Destination-side failures (SQLite file creation, SQL execution)
//! - The umbrella export error returned by the export operations

mod types;

// Re-export public API
pub use types::{DatabaseError, ExportError, InitializationError, SourceError};
