//! Storage layer for the expense tracker
//!
//! A single comma-separated backing store, read whole and rewritten whole.

pub mod file_io;

pub use file_io::{load_records, save_records};
