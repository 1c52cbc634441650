//! Expense model
//!
//! [`ExpenseRecord`] is one persisted row, kept as text exactly as it sits in
//! the backing store. [`Expense`] is a validated entry on its way into the
//! ledger. Stored Date and Amount are only parsed when a computation needs them.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Column order of the backing store and of the rendered table
pub const FIELDNAMES: [&str; 4] = ["Date", "Category", "Amount", "Description"];

/// A single expense row as persisted
///
/// Any field may be empty when the store was edited by hand; such rows are
/// invalid and get pruned before display or totaling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(rename = "Date", default)]
    pub date: String,

    #[serde(rename = "Category", default)]
    pub category: String,

    #[serde(rename = "Amount", default)]
    pub amount: String,

    #[serde(rename = "Description", default)]
    pub description: String,
}

impl ExpenseRecord {
    /// Create a record from raw field values
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Field values in [`FIELDNAMES`] order
    pub fn fields(&self) -> [&str; 4] {
        [&self.date, &self.category, &self.amount, &self.description]
    }

    /// A record is complete when none of its fields is the empty string
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|field| !field.is_empty())
    }

    /// Parse the persisted Date
    ///
    /// Failures here are malformed stored data, not user input, so they
    /// surface as [`TrackerError::Parse`].
    pub fn parsed_date(&self, date_format: &str) -> TrackerResult<NaiveDate> {
        parse_date(&self.date, date_format).map_err(|_| TrackerError::parse("Date", &self.date))
    }

    /// Parse the persisted Amount, failing with [`TrackerError::Parse`]
    pub fn parsed_amount(&self) -> TrackerResult<Decimal> {
        parse_amount(&self.amount).map_err(|_| TrackerError::parse("Amount", &self.amount))
    }
}

/// A validated expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    pub description: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Convert back to the persisted row form
    pub fn to_record(&self, date_format: &str) -> ExpenseRecord {
        ExpenseRecord {
            date: self.date.format(date_format).to_string(),
            category: self.category.clone(),
            amount: self.amount.normalize().to_string(),
            description: self.description.clone(),
        }
    }
}

/// Check that `text` is a date under `date_format`, matching it exactly
///
/// Chrono accepts "2024-1-5" for "%Y-%m-%d"; requiring the parsed date to
/// format back to the same text rejects missing zero-padding and stray
/// whitespace.
pub fn is_valid_date(text: &str, date_format: &str) -> bool {
    parse_date(text, date_format).is_ok()
}

/// Parse a date that must match `date_format` exactly
pub fn parse_date(text: &str, date_format: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(text, date_format)
        .ok()
        .filter(|date| date.format(date_format).to_string() == text)
        .ok_or_else(|| TrackerError::InvalidDate(text.to_string()))
}

/// Parse a monetary amount
///
/// Any real number is accepted, including negatives (refunds, corrections)
/// and scientific notation. Real numbers beyond the exact decimal range
/// (about ±7.9e28) fail with [`TrackerError::OutOfRange`].
pub fn parse_amount(text: &str) -> TrackerResult<Decimal> {
    parse_decimal(text, TrackerError::InvalidAmount)
}

/// Parse a decimal, reporting non-numbers through `invalid`
pub(crate) fn parse_decimal(
    text: &str,
    invalid: fn(String) -> TrackerError,
) -> TrackerResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid(text.to_string()));
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            if trimmed.parse::<f64>().is_ok() {
                TrackerError::OutOfRange(text.to_string())
            } else {
                invalid(text.to_string())
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    const FMT: &str = "%Y-%m-%d";

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_valid_dates() {
        assert!(is_valid_date("2024-01-05", FMT));
        assert!(is_valid_date("2024-02-29", FMT));
        assert!(is_valid_date("1999-12-31", FMT));
    }

    #[test]
    fn test_invalid_dates() {
        assert!(!is_valid_date("2024-1-5", FMT));
        assert!(!is_valid_date("2024/01/05", FMT));
        assert!(!is_valid_date("2024-13-01", FMT));
        assert!(!is_valid_date("2023-02-29", FMT));
        assert!(!is_valid_date("2024-04-31", FMT));
        assert!(!is_valid_date(" 2024-01-05", FMT));
        assert!(!is_valid_date("2024-01-05 ", FMT));
        assert!(!is_valid_date("", FMT));
        assert!(!is_valid_date("yesterday", FMT));
    }

    #[test]
    fn test_parse_date_error() {
        let err = parse_date("05-01-2024", FMT).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidDate(ref s) if s == "05-01-2024"));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), dec("12.50"));
        assert_eq!(parse_amount("-3").unwrap(), dec("-3"));
        assert_eq!(parse_amount(" 100 ").unwrap(), dec("100"));
        assert_eq!(parse_amount("1e2").unwrap(), dec("100"));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("twelve").is_err());
        assert!(parse_amount("$12").is_err());
    }

    #[test]
    fn test_parse_amount_range() {
        let max = "50000000000000000000000000000";
        assert_eq!(parse_amount(max).unwrap(), dec(max));

        let err = parse_amount("1e30").unwrap_err();
        assert!(matches!(err, TrackerError::OutOfRange(ref s) if s == "1e30"));
        assert_eq!(err.to_string(), "Number is out of range.");
        assert!(err.is_validation());

        assert!(matches!(
            parse_amount("inf").unwrap_err(),
            TrackerError::OutOfRange(_)
        ));
        assert!(matches!(
            parse_amount("lots").unwrap_err(),
            TrackerError::InvalidAmount(_)
        ));
    }

    #[test]
    fn test_is_complete() {
        let record = ExpenseRecord::new("2024-03-01", "Food", "12.5", "Lunch");
        assert!(record.is_complete());

        let mut missing = record.clone();
        missing.category.clear();
        assert!(!missing.is_complete());
        assert!(!ExpenseRecord::default().is_complete());
    }

    #[test]
    fn test_parsed_fields() {
        let record = ExpenseRecord::new("2024-03-01", "Food", "12.5", "Lunch");

        assert_eq!(
            record.parsed_date(FMT).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(record.parsed_amount().unwrap(), dec("12.5"));
    }

    #[test]
    fn test_parsed_fields_malformed() {
        let bad_date = ExpenseRecord::new("2024-3-1", "Food", "12.5", "Lunch");
        let err = bad_date.parsed_date(FMT).unwrap_err();
        assert!(matches!(err, TrackerError::Parse { field: "Date", .. }));

        let bad_amount = ExpenseRecord::new("2024-03-01", "Food", "lots", "Lunch");
        let err = bad_amount.parsed_amount().unwrap_err();
        assert!(matches!(err, TrackerError::Parse { field: "Amount", .. }));
    }

    #[test]
    fn test_record_round_trip() {
        let record = ExpenseRecord::new("2024-03-01", "Food", "12.5", "Lunch");
        let expense = Expense::new(
            record.parsed_date(FMT).unwrap(),
            "Food",
            record.parsed_amount().unwrap(),
            "Lunch",
        );
        assert_eq!(expense.to_record(FMT), record);
    }

    #[test]
    fn test_to_record_normalizes_amount() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let expense = Expense::new(date, "Food", dec("12.50"), "Lunch");
        assert_eq!(expense.to_record(FMT).amount, "12.5");
    }
}
