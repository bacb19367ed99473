//! Configuration: CLI options and fixed constants.

pub mod constants;
pub mod types;

pub use constants::{DEFAULT_OUTPUT_DIR, SYSTEM_TABLES};
pub use types::{Config, LogFormat, LogLevel};
