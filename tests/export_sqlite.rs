//! Tests for SQLite export functionality.

use gint_extract::export::{init_destination_pool, write_snapshot_to_sqlite};
use gint_extract::TableSnapshot;
use sqlx::{Column, Row, SqlitePool};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{awkward_snapshot, sample_snapshot};

async fn fetch_rows(pool: &SqlitePool, table: &str) -> Vec<Vec<Option<String>>> {
    let query = format!("SELECT * FROM \"{table}\" ORDER BY rowid");
    let rows = sqlx::query(&query)
        .fetch_all(pool)
        .await
        .expect("Should read exported table back");
    rows.iter()
        .map(|row| {
            (0..row.columns().len())
                .map(|index| row.get::<Option<String>, _>(index))
                .collect()
        })
        .collect()
}

#[tokio::test]
async fn test_export_sqlite_basic() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("export.db");

    let pool = init_destination_pool(&db_path)
        .await
        .expect("Should create destination pool");
    let written = write_snapshot_to_sqlite(&sample_snapshot(), "table1", &pool)
        .await
        .expect("Export should succeed");
    assert_eq!(written, 2, "Should report 2 rows written");

    let rows = fetch_rows(&pool, "table1").await;
    assert_eq!(
        rows,
        vec![
            vec![Some("1".to_string()), Some("3".to_string())],
            vec![Some("2".to_string()), Some("4".to_string())],
        ],
        "Destination contents should equal the snapshot"
    );

    // Column names survive, and no synthetic index column appears
    let row = sqlx::query("SELECT * FROM \"table1\" LIMIT 1")
        .fetch_one(&pool)
        .await
        .expect("Should fetch a row");
    let names: Vec<&str> = row.columns().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["col1", "col2"]);

    pool.close().await;
}

#[tokio::test]
async fn test_export_sqlite_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("export.db");

    let pool = init_destination_pool(&db_path)
        .await
        .expect("Should create destination pool");

    write_snapshot_to_sqlite(&sample_snapshot(), "table1", &pool)
        .await
        .expect("First export should succeed");
    write_snapshot_to_sqlite(&sample_snapshot(), "table1", &pool)
        .await
        .expect("Second export should succeed");

    let rows = fetch_rows(&pool, "table1").await;
    assert_eq!(
        rows.len(),
        2,
        "Exporting twice should replace the table, not append to it"
    );

    pool.close().await;
}

#[tokio::test]
async fn test_export_sqlite_replaces_previous_contents() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("export.db");

    let pool = init_destination_pool(&db_path)
        .await
        .expect("Should create destination pool");

    write_snapshot_to_sqlite(&sample_snapshot(), "table1", &pool)
        .await
        .expect("First export should succeed");

    let replacement = TableSnapshot::new(
        vec!["col1".to_string()],
        vec![vec![Some("99".to_string())]],
    );
    write_snapshot_to_sqlite(&replacement, "table1", &pool)
        .await
        .expect("Replacement export should succeed");

    let rows = fetch_rows(&pool, "table1").await;
    assert_eq!(
        rows,
        vec![vec![Some("99".to_string())]],
        "Replacement should drop the old schema and contents entirely"
    );

    pool.close().await;
}

#[tokio::test]
async fn test_export_sqlite_preserves_nulls_and_quoted_names() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("export.db");

    let pool = init_destination_pool(&db_path)
        .await
        .expect("Should create destination pool");

    write_snapshot_to_sqlite(&awkward_snapshot(), "SAMPLE DATA", &pool)
        .await
        .expect("Export with spaced identifiers should succeed");

    let rows = fetch_rows(&pool, "SAMPLE DATA").await;
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[1][1], None,
        "NULL cells should stay NULL in the destination"
    );
    assert_eq!(
        rows[0][1].as_deref(),
        Some("clay, some \"gravel\""),
        "Values should be carried over verbatim"
    );

    pool.close().await;
}

#[tokio::test]
async fn test_export_sqlite_multiple_tables_one_pool() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("export.db");

    let pool = init_destination_pool(&db_path)
        .await
        .expect("Should create destination pool");

    write_snapshot_to_sqlite(&sample_snapshot(), "table1", &pool)
        .await
        .expect("First table should export");
    write_snapshot_to_sqlite(&awkward_snapshot(), "table2", &pool)
        .await
        .expect("Second table should export over the same pool");

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('table1', 'table2')",
    )
    .fetch_one(&pool)
    .await
    .expect("Should count destination tables");
    assert_eq!(count, 2, "Both tables should exist in the destination file");

    pool.close().await;
}

#[tokio::test]
async fn test_export_sqlite_reuses_existing_destination_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("export.db");

    let pool = init_destination_pool(&db_path)
        .await
        .expect("Should create destination pool");
    write_snapshot_to_sqlite(&sample_snapshot(), "table1", &pool)
        .await
        .expect("Export should succeed");
    pool.close().await;

    // Opening the same destination again must not fail or wipe other tables
    let pool = init_destination_pool(&db_path)
        .await
        .expect("Should reopen existing destination");
    let rows = fetch_rows(&pool, "table1").await;
    assert_eq!(rows.len(), 2, "Contents should survive reopening");

    pool.close().await;
}
