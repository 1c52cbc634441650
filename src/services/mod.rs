//! Service layer for the expense tracker
//!
//! The expense ledger and the budget check built on top of it.

pub mod budget;
pub mod ledger;

pub use budget::{
    compute_total, filter_current_month, track_budget, BudgetReport, BudgetStatus, BudgetView,
};
pub use ledger::Ledger;
