//! Core data models for the expense tracker
//!
//! Expense rows, the validating parsers used at entry time, and the
//! monthly budget.

pub mod budget;
pub mod expense;

pub use budget::MonthlyBudget;
pub use expense::{
    is_valid_date, parse_amount, parse_date, Expense, ExpenseRecord, FIELDNAMES,
};
