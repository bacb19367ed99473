//! CSV export functionality.
//!
//! One CSV file per table: header row from the column names, one record per
//! source row, NULL cells rendered as empty fields, no synthetic index
//! column. Existing files of the same name are overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use csv::Writer;
use log::{info, warn};

use crate::error_handling::ExportError;
use crate::export::types::{ExportStats, OnTableError};
use crate::source::{GintDatabase, TableSnapshot};

/// Path of the CSV file a table is written to.
fn csv_path(table: &str, directory: &Path) -> PathBuf {
    directory.join(format!("{table}.csv"))
}

/// Serializes a snapshot to `<directory>/<table>.csv`.
///
/// Creates `directory` (and any missing parents) first. Returns the number
/// of data rows written.
///
/// # Errors
///
/// Returns [`ExportError`] if the directory cannot be created or the file
/// cannot be written.
pub fn write_snapshot_to_csv(
    snapshot: &TableSnapshot,
    table: &str,
    directory: &Path,
) -> Result<usize, ExportError> {
    fs::create_dir_all(directory)?;
    let path = csv_path(table, directory);
    let mut writer = Writer::from_path(&path)?;
    writer.write_record(snapshot.columns())?;
    for row in snapshot.rows() {
        writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }
    writer.flush()?;
    Ok(snapshot.row_count())
}

/// Reads `table` fresh from the source and writes it to
/// `<directory>/<table>.csv`.
pub fn write_table_to_csv(
    db: &GintDatabase,
    table: &str,
    directory: &Path,
) -> Result<usize, ExportError> {
    let snapshot = db.get_table(table)?;
    let rows = write_snapshot_to_csv(&snapshot, table, directory)?;
    info!(
        "Wrote {} rows to {}",
        rows,
        csv_path(table, directory).display()
    );
    Ok(rows)
}

/// Exports every non-empty table to CSV files under `directory`.
///
/// Tables are exported in discovery order. A failing table either aborts the
/// run or is skipped with a warning, depending on `on_table_error`.
pub fn write_all_tables_to_csv(
    db: &GintDatabase,
    directory: &Path,
    on_table_error: OnTableError,
) -> Result<ExportStats, ExportError> {
    fs::create_dir_all(directory)?;
    let mut stats = ExportStats::default();
    for table in db.non_empty_tables() {
        match write_table_to_csv(db, table, directory) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_path_appends_extension() {
        let path = csv_path("POINT", Path::new("out"));
        assert_eq!(path, Path::new("out").join("POINT.csv"));
    }
}
