//! Budget report formatting

use rust_decimal::Decimal;

use crate::services::{BudgetReport, BudgetStatus};

/// Format an amount with exactly two decimal places
///
/// `Decimal`'s `{:.2}` truncates extra digits, so round first.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Format the result of a budget check, one line per fact
pub fn format_budget_report(report: &BudgetReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Total Amount: {}\n", format_amount(report.total)));

    match report.status {
        BudgetStatus::Remaining(left) => {
            output.push_str(&format!(
                "You have ${} left for the month.\n",
                format_amount(left)
            ));
        }
        BudgetStatus::Exceeded(over) => {
            output.push_str(&format!(
                "WARNING: You have exceeded your budget by {}.\n",
                format_amount(over)
            ));
        }
    }

    output
}
