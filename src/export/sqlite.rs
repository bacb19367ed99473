//! SQLite export functionality.
//!
//! All tables are written into one destination database file over a single
//! connection pool. Each table is dropped and recreated on every export
//! (replace semantics), with all columns declared TEXT and values carried
//! over verbatim, NULLs included. No synthetic index column is written.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use log::{error, info, warn};
use sqlx::SqlitePool;

use crate::error_handling::{DatabaseError, ExportError};
use crate::export::types::{ExportStats, OnTableError};
use crate::source::{GintDatabase, TableSnapshot};

/// Initializes a connection pool to the destination SQLite file.
///
/// Creates the database file if it doesn't exist.
///
/// # Errors
///
/// Returns [`DatabaseError::FileCreationError`] if the file cannot be
/// created, or [`DatabaseError::SqlError`] if the connection fails.
pub async fn init_destination_pool(path: &Path) -> Result<SqlitePool, DatabaseError> {
    let path_str = path.to_string_lossy().to_string();
    match OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(&path_str)
    {
        Ok(_) => info!("Destination database file created."),
        Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
            info!("Destination database file already exists.")
        }
        Err(e) => {
            error!("Failed to create destination database file: {e}");
            return Err(DatabaseError::FileCreationError(e.to_string()));
        }
    }

    let pool = SqlitePool::connect(&format!("sqlite:{}", path_str))
        .await
        .map_err(|e| {
            error!("Failed to connect to destination database: {e}");
            DatabaseError::SqlError(e)
        })?;

    Ok(pool)
}

/// Quotes an identifier for use in SQLite DDL/DML.
///
/// gINT table and column names routinely contain spaces; embedded quotes are
/// doubled per the SQL standard.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Writes a snapshot into the destination as table `table`, replacing any
/// existing table of that name.
///
/// The table is dropped and recreated with one TEXT column per snapshot
/// column; rows are inserted inside a single transaction. Returns the number
/// of rows written. A snapshot with no columns writes nothing (a table
/// without columns is not valid SQL).
pub async fn write_snapshot_to_sqlite(
    snapshot: &TableSnapshot,
    table: &str,
    pool: &SqlitePool,
) -> Result<usize, DatabaseError> {
    if snapshot.column_count() == 0 {
        return Ok(0);
    }

    let quoted = quote_identifier(table);
    sqlx::query(&format!("DROP TABLE IF EXISTS {quoted}"))
        .execute(pool)
        .await?;

    let column_defs = snapshot
        .columns()
        .iter()
        .map(|column| format!("{} TEXT", quote_identifier(column)))
        .collect::<Vec<_>>()
        .join(", ");
    sqlx::query(&format!("CREATE TABLE {quoted} ({column_defs})"))
        .execute(pool)
        .await?;

    let placeholders = vec!["?"; snapshot.column_count()].join(", ");
    let insert_sql = format!("INSERT INTO {quoted} VALUES ({placeholders})");

    let mut tx = pool.begin().await?;
    for row in snapshot.rows() {
        let mut insert = sqlx::query(&insert_sql);
        for cell in row {
            insert = insert.bind(cell.as_deref());
        }
        insert.execute(&mut *tx).await?;
    }
    tx.commit().await?;

    Ok(snapshot.row_count())
}

/// Reads `table` fresh from the source and writes it into the destination
/// pool, replacing any existing table of that name.
pub async fn write_table_to_sqlite(
    db: &GintDatabase,
    table: &str,
    pool: &SqlitePool,
) -> Result<usize, ExportError> {
    let snapshot = db.get_table(table)?;
    let rows = write_snapshot_to_sqlite(&snapshot, table, pool).await?;
    info!("Wrote table `{}` ({} rows) to the destination database", table, rows);
    Ok(rows)
}

/// Exports every non-empty table into a SQLite database at `destination`.
///
/// Opens (creating if absent) the destination file, writes all tables over
/// one pool in discovery order, and closes the pool on every exit path. A
/// failing table either aborts the run or is skipped with a warning,
/// depending on `on_table_error`.
pub async fn write_all_tables_to_sqlite(
    db: &GintDatabase,
    destination: &Path,
    on_table_error: OnTableError,
) -> Result<ExportStats, ExportError> {
    let pool = init_destination_pool(destination).await?;
    let result = write_tables(db, &pool, on_table_error).await;
    pool.close().await;
    result
}

async fn write_tables(
    db: &GintDatabase,
    pool: &SqlitePool,
    on_table_error: OnTableError,
) -> Result<ExportStats, ExportError> {
    let mut stats = ExportStats::default();
    for table in db.non_empty_tables() {
        match write_table_to_sqlite(db, table, pool).await {
            Ok(rows) => {
                stats.tables_exported += 1;
                stats.rows_exported += rows;
            }
            Err(e) if on_table_error == OnTableError::Skip => {
                warn!("Skipping table `{}`: {}", table, e);
                stats.tables_skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(stats)
}
