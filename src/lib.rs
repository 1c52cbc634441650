//! Expense tracker - terminal-based personal finance tracker
//!
//! Records dated expenses to a comma-separated file, shows them as a table,
//! and compares the current month's spending against a monthly budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file location and date format
//! - `error`: Custom error types
//! - `models`: Expense rows, validating parsers, the monthly budget
//! - `storage`: Delimited-text backing store
//! - `services`: The expense ledger and the budget check
//! - `display`: Table and report formatting
//! - `cli`: Interactive menu shell
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::LedgerConfig;
//! use expense_tracker::services::Ledger;
//!
//! let mut ledger = Ledger::load(LedgerConfig::default())?;
//! println!("{}", ledger.view());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
