//! Budget tracking service
//!
//! A [`BudgetView`] is a snapshot of the ledger's current-month records
//! against a monthly limit. It is built fresh for every check and goes stale
//! as soon as the ledger changes or the month rolls over.

use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseRecord, MonthlyBudget};
use crate::services::Ledger;

/// Where spending stands relative to the limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// `limit - total`, zero or more
    Remaining(Decimal),
    /// `|limit - total|` when spending went over the limit
    Exceeded(Decimal),
}

/// Result of a budget check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetReport {
    pub total: Decimal,
    pub status: BudgetStatus,
}

/// The current month's records plus a spending limit
#[derive(Debug, Clone)]
pub struct BudgetView {
    budget: MonthlyBudget,
    data: Vec<ExpenseRecord>,
}

impl BudgetView {
    /// Build a view over the ledger's records for the month containing `now`
    pub fn new(budget: MonthlyBudget, ledger: &Ledger, now: NaiveDate) -> TrackerResult<Self> {
        Self::from_records(budget, ledger.records(), ledger.date_format(), now)
    }

    /// Build a view over arbitrary records
    pub fn from_records(
        budget: MonthlyBudget,
        records: &[ExpenseRecord],
        date_format: &str,
        now: NaiveDate,
    ) -> TrackerResult<Self> {
        let data = filter_current_month(records, date_format, now)?;
        debug!(
            "budget view for {}-{:02}: {} of {} records",
            now.year(),
            now.month(),
            data.len(),
            records.len()
        );
        Ok(Self { budget, data })
    }

    /// Records dated in the view's month
    pub fn data(&self) -> &[ExpenseRecord] {
        &self.data
    }

    /// Total spend for the month and the remaining or exceeded amount
    pub fn track(&self) -> TrackerResult<BudgetReport> {
        let total = compute_total(&self.data)?;
        Ok(BudgetReport {
            total,
            status: track_budget(self.budget.limit(), total)?,
        })
    }
}

/// Select the records dated in the same month and year as `now`
///
/// Records with an empty field are invalid and never counted, so they are
/// skipped. A non-empty Date that doesn't match `date_format` can only come
/// from editing the store by hand and fails the whole filter.
pub fn filter_current_month(
    records: &[ExpenseRecord],
    date_format: &str,
    now: NaiveDate,
) -> TrackerResult<Vec<ExpenseRecord>> {
    let mut filtered = Vec::new();

    for record in records.iter().filter(|r| r.is_complete()) {
        let date = record.parsed_date(date_format)?;
        if date.year() == now.year() && date.month() == now.month() {
            filtered.push(record.clone());
        }
    }

    Ok(filtered)
}

/// Sum the Amount of every record, parsing each one
pub fn compute_total(records: &[ExpenseRecord]) -> TrackerResult<Decimal> {
    records
        .iter()
        .try_fold(Decimal::ZERO, |total, record| -> TrackerResult<Decimal> {
            total
                .checked_add(record.parsed_amount()?)
                .ok_or(TrackerError::Overflow("monthly total"))
        })
}

/// Compare a total against a limit
pub fn track_budget(limit: Decimal, total: Decimal) -> TrackerResult<BudgetStatus> {
    let left = limit
        .checked_sub(total)
        .ok_or(TrackerError::Overflow("remaining budget"))?;

    if left < Decimal::ZERO {
        Ok(BudgetStatus::Exceeded(left.abs()))
    } else {
        Ok(BudgetStatus::Remaining(left))
    }
}
