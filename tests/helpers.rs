// Shared test helpers for building table snapshots.
//
// This module provides common fixtures used across multiple test files to reduce duplication.

use gint_extract::TableSnapshot;

/// Builds the two-row sample table used across the export tests:
/// columns `col1`/`col2`, rows (1,3) and (2,4).
#[allow(dead_code)] // Used by other test files
pub fn sample_snapshot() -> TableSnapshot {
    TableSnapshot::new(
        vec!["col1".to_string(), "col2".to_string()],
        vec![
            vec![Some("1".to_string()), Some("3".to_string())],
            vec![Some("2".to_string()), Some("4".to_string())],
        ],
    )
}

/// Builds a snapshot containing NULL cells and values that need CSV quoting.
#[allow(dead_code)] // Used by other test files
pub fn awkward_snapshot() -> TableSnapshot {
    TableSnapshot::new(
        vec!["Depth".to_string(), "Field Notes".to_string()],
        vec![
            vec![Some("1.5".to_string()), Some("clay, some \"gravel\"".to_string())],
            vec![Some("3.0".to_string()), None],
        ],
    )
}

/// Builds a snapshot with columns but no rows.
#[allow(dead_code)] // Used by other test files
pub fn empty_snapshot() -> TableSnapshot {
    TableSnapshot::new(
        vec!["col1".to_string(), "col2".to_string()],
        Vec::new(),
    )
}
