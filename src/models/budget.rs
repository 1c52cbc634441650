//! Monthly budget model
//!
//! A spending limit for the current calendar month. It lives only in the
//! interactive session and is never persisted.

use std::fmt;

use rust_decimal::Decimal;

use super::expense::parse_decimal;
use crate::display::format_amount;
use crate::error::{TrackerError, TrackerResult};

/// A strictly positive monthly spending limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthlyBudget(Decimal);

impl MonthlyBudget {
    /// Create a budget, rejecting zero and negative limits
    pub fn new(limit: Decimal) -> TrackerResult<Self> {
        if limit <= Decimal::ZERO {
            return Err(TrackerError::NonPositiveBudget(limit));
        }
        Ok(Self(limit))
    }

    /// Parse a budget entered by the user
    pub fn parse(text: &str) -> TrackerResult<Self> {
        let limit = parse_decimal(text, TrackerError::InvalidNumber)?;
        Self::new(limit)
    }

    /// Get the limit
    pub const fn limit(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for MonthlyBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.0))
    }
}
