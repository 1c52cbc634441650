//! Display formatting for terminal output
//!
//! Turns ledger rows and budget reports into the text the shell prints.

pub mod budget;
pub mod expense;

pub use budget::{format_amount, format_budget_report};
pub use expense::format_expense_table;
