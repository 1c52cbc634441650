//! Configuration module for the expense tracker
//!
//! Holds the data file location and date format that every ledger
//! operation is parameterized by.

pub mod settings;

pub use settings::{LedgerConfig, DATA_FILE, DATE_FORMAT};
