//! Fixed constants used as defaults and filters.

/// Default output location when `--dir` is not given.
///
/// In CSV mode this is a directory; in SQLite mode it is the destination
/// database file path.
pub const DEFAULT_OUTPUT_DIR: &str = "csv";

/// System/internal table names excluded from export.
///
/// gINT files are Access databases, and the driver's catalog reports the
/// Access-internal `MSys*` tables alongside user data. None of these
/// represent geotechnical records.
///
/// To add/remove names, modify this array.
pub const SYSTEM_TABLES: &[&str] = &[
    "MSysAccessObjects",
    "MSysAccessStorage",
    "MSysACEs",
    "MSysComplexColumns",
    "MSysIMEXColumns",
    "MSysIMEXSpecs",
    "MSysNameMap",
    "MSysNavPaneGroupCategories",
    "MSysNavPaneGroups",
    "MSysNavPaneGroupToObjects",
    "MSysNavPaneObjectIDs",
    "MSysObjects",
    "MSysQueries",
    "MSysRelationships",
];

// Bulk fetch sizing
/// Rows fetched from the source per driver round trip.
pub const ROW_BATCH_SIZE: usize = 500;

/// Upper bound on the text rendering of a single field, in bytes.
///
/// gINT memo/description fields can run long; anything beyond this is
/// truncated by the driver buffer. 8 KiB comfortably covers observed
/// geotechnical exports while keeping a batch allocation bounded at
/// `ROW_BATCH_SIZE * columns * MAX_FIELD_TEXT_LEN`.
pub const MAX_FIELD_TEXT_LEN: usize = 8192;
