//! ODBC connection and table discovery for the source database.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::{debug, info};
use odbc_api::buffers::TextRowSet;
use odbc_api::{Connection, ConnectionOptions, Cursor, Environment, ResultSetMetadata};

use crate::config::constants::{MAX_FIELD_TEXT_LEN, ROW_BATCH_SIZE};
use crate::config::SYSTEM_TABLES;
use crate::error_handling::SourceError;
use crate::source::TableSnapshot;

/// Zero-based position of TABLE_NAME in the `SQLTables` catalog result set.
const TABLE_NAME_COLUMN: usize = 2;

/// Returns the process-wide ODBC environment, creating it on first use.
///
/// Connections borrow the environment, so it must outlive every
/// [`GintDatabase`]; a `'static` singleton is the usual odbc-api arrangement.
fn odbc_environment() -> Result<&'static Environment, SourceError> {
    static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();
    if let Some(env) = ENVIRONMENT.get() {
        return Ok(env);
    }
    let env = Environment::new()?;
    Ok(ENVIRONMENT.get_or_init(|| env))
}

/// Builds the Access driver connection string for a source file.
fn connection_string(file_path: &Path) -> String {
    format!(
        "Driver={{Microsoft Access Driver (*.mdb, *.accdb)}};DBQ={};",
        file_path.display()
    )
}

/// Removes denylisted system table names, preserving driver order.
fn filter_user_tables(names: Vec<String>, denylist: &[&str]) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| !denylist.contains(&name.as_str()))
        .collect()
}

/// An open gINT source database.
///
/// Holds the ODBC connection for its whole lifetime and releases it on drop.
/// Construction is two-phase: [`open`](Self::open) establishes the
/// connection, [`discover_tables`](Self::discover_tables) fixes the table
/// census. The census is computed once and not revalidated afterwards; table
/// *contents* are read fresh from the source on every call.
///
/// # Examples
///
/// ```no_run
/// use gint_extract::GintDatabase;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut db = GintDatabase::open("project.gpj")?;
/// db.discover_tables()?;
/// for table in db.non_empty_tables() {
///     let snapshot = db.get_table(table)?;
///     println!("{}: {} rows", table, snapshot.row_count());
/// }
/// # Ok(())
/// # }
/// ```
pub struct GintDatabase {
    file_path: PathBuf,
    connection: Connection<'static>,
    table_names: Vec<String>,
    non_empty_tables: Vec<String>,
}

impl GintDatabase {
    /// Opens an ODBC connection to the gINT database at `file_path`.
    ///
    /// This only establishes the connection; call
    /// [`discover_tables`](Self::discover_tables) before reading, so that a
    /// connection failure and an enumeration failure stay distinguishable to
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::OdbcError`] if the driver manager cannot open
    /// the file (missing driver, bad path, malformed database).
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let file_path = file_path.into();
        let connection = odbc_environment()?.connect_with_connection_string(
            &connection_string(&file_path),
            ConnectionOptions::default(),
        )?;
        debug!("Opened source database {}", file_path.display());
        Ok(Self {
            file_path,
            connection,
            table_names: Vec::new(),
            non_empty_tables: Vec::new(),
        })
    }

    /// Path of the source database file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// User table names reported by the driver, denylist applied, driver
    /// enumeration order preserved. Empty before
    /// [`discover_tables`](Self::discover_tables) has run.
    pub fn table_names(&self) -> &[String] {
        &self.table_names
    }

    /// The subset of [`table_names`](Self::table_names) that held at least
    /// one row at discovery time.
    pub fn non_empty_tables(&self) -> &[String] {
        &self.non_empty_tables
    }

    /// Enumerates user tables and fixes the non-empty census.
    ///
    /// Lists tables through the driver catalog, drops every name in the
    /// system-table denylist, then counts each remaining table by reading it
    /// once and keeps the names with at least one row.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the catalog query or any counting read
    /// fails. The census is left unchanged in that case.
    pub fn discover_tables(&mut self) -> Result<(), SourceError> {
        let names = self.list_user_tables()?;
        let mut non_empty = Vec::with_capacity(names.len());
        for name in &names {
            if self.table_length(name)? > 0 {
                non_empty.push(name.clone());
            } else {
                debug!("Table `{}` is empty, excluded from export", name);
            }
        }
        info!(
            "Discovered {} user tables, {} non-empty",
            names.len(),
            non_empty.len()
        );
        self.table_names = names;
        self.non_empty_tables = non_empty;
        Ok(())
    }

    /// Reads the full contents of `table` into a [`TableSnapshot`].
    ///
    /// Issues `SELECT * FROM [table]` and materializes every row through the
    /// driver's bulk text buffers. No paging, no column filtering, no type
    /// coercion beyond the driver's text rendering.
    pub fn get_table(&self, table: &str) -> Result<TableSnapshot, SourceError> {
        let query = format!("SELECT * FROM [{table}]");
        let cursor = self
            .connection
            .execute(&query, (), None)?
            .ok_or_else(|| SourceError::NoResultSet(table.to_string()))?;
        snapshot_from_cursor(cursor)
    }

    /// Number of rows currently in `table`.
    ///
    /// Recomputed by reading the whole table; nothing is cached. O(table
    /// size), acceptable for gINT-scale data.
    pub fn table_length(&self, table: &str) -> Result<usize, SourceError> {
        Ok(self.get_table(table)?.row_count())
    }

    /// Materializes every non-empty table, in discovery order.
    pub fn snapshots(&self) -> Result<Vec<(String, TableSnapshot)>, SourceError> {
        self.non_empty_tables
            .iter()
            .map(|table| Ok((table.clone(), self.get_table(table)?)))
            .collect()
    }

    /// Lists user table names through the `SQLTables` catalog function.
    fn list_user_tables(&self) -> Result<Vec<String>, SourceError> {
        let mut cursor = self.connection.tables("", "", "", "TABLE")?;
        let mut names = Vec::new();
        let mut buffers = TextRowSet::for_cursor(ROW_BATCH_SIZE, &mut cursor, Some(MAX_FIELD_TEXT_LEN))?;
        let mut row_set = cursor.bind_buffer(&mut buffers)?;
        while let Some(batch) = row_set.fetch()? {
            for row in 0..batch.num_rows() {
                if let Some(bytes) = batch.at(TABLE_NAME_COLUMN, row) {
                    names.push(String::from_utf8_lossy(bytes).into_owned());
                }
            }
        }
        Ok(filter_user_tables(names, SYSTEM_TABLES))
    }
}

/// Drains a cursor into a snapshot via bulk text buffers.
fn snapshot_from_cursor(mut cursor: impl Cursor) -> Result<TableSnapshot, SourceError> {
    let columns: Vec<String> = cursor.column_names()?.collect::<Result<_, _>>()?;
    let mut rows = Vec::new();
    let mut buffers = TextRowSet::for_cursor(ROW_BATCH_SIZE, &mut cursor, Some(MAX_FIELD_TEXT_LEN))?;
    let mut row_set = cursor.bind_buffer(&mut buffers)?;
    while let Some(batch) = row_set.fetch()? {
        for row in 0..batch.num_rows() {
            let mut record = Vec::with_capacity(batch.num_cols());
            for col in 0..batch.num_cols() {
                record.push(
                    batch
                        .at(col, row)
                        .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
                );
            }
            rows.push(record);
        }
    }
    Ok(TableSnapshot::new(columns, rows))
}
