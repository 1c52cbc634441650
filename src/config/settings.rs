//! Ledger settings
//!
//! The data file path and the date format are fixed for the binary, but are
//! carried in an explicit [`LedgerConfig`] so tests can point a ledger at a
//! scratch file.

use std::path::{Path, PathBuf};

/// Default backing store, relative to the working directory
pub const DATA_FILE: &str = "data.csv";

/// Fixed calendar date format (strftime), e.g. "2024-01-05"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Settings a [`crate::services::Ledger`] is constructed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Path of the delimited-text backing store
    pub data_file: PathBuf,

    /// Date format every record's Date must match exactly
    pub date_format: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DATA_FILE),
            date_format: DATE_FORMAT.to_string(),
        }
    }
}

impl LedgerConfig {
    /// Create a config using the default date format and a custom data file
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Self::default()
        }
    }

    /// Get the backing store path
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}
