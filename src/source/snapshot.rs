//! In-memory table contents.

/// Full in-memory materialization of one table at the moment it was read.
///
/// Columns keep the order the driver reported them in; rows keep source
/// cursor order. Cells carry the driver's text rendering of each value, with
/// `None` standing for SQL NULL. There is no inherent key and no synthetic
/// row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl TableSnapshot {
    /// Creates a snapshot from column names and row data.
    ///
    /// Every row is expected to have one cell per column; the export writers
    /// rely on that shape.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self { columns, rows }
    }

    /// Ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in source cursor order.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of rows in the snapshot.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the snapshot.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the snapshot holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
