//! Export functionality for gINT table data.
//!
//! This module provides functions to write discovered tables either as one
//! CSV file per table or into a single SQLite database. Each operation reads
//! the table fresh from the source; the snapshot-level variants serialize an
//! already-materialized [`TableSnapshot`](crate::source::TableSnapshot).

mod csv;
mod sqlite;
mod types;

pub use self::csv::{write_all_tables_to_csv, write_snapshot_to_csv, write_table_to_csv};
pub use self::sqlite::{
    init_destination_pool, write_all_tables_to_sqlite, write_snapshot_to_sqlite,
    write_table_to_sqlite,
};
pub use self::types::{ExportFormat, ExportStats, OnTableError};
