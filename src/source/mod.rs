//! Source database access.
//!
//! This module owns the gINT side of the pipeline: the ODBC connection to the
//! Access-format source file, table discovery (catalog enumeration, system
//! table filtering, non-empty census), and full-table reads into
//! [`TableSnapshot`] values.

mod connection;
mod snapshot;

// Re-export public API
pub use connection::GintDatabase;
pub use snapshot::TableSnapshot;
