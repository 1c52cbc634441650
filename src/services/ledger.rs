//! Expense ledger service
//!
//! Owns the in-memory sequence of expense rows for a session. Nothing here
//! writes to the backing store implicitly: changes only reach disk through
//! [`Ledger::save`].

use log::debug;

use crate::config::LedgerConfig;
use crate::display::format_expense_table;
use crate::error::TrackerResult;
use crate::models::{Expense, ExpenseRecord};
use crate::storage::{load_records, save_records};

/// The in-memory expense ledger, backed by a delimited-text file
#[derive(Debug, Clone)]
pub struct Ledger {
    config: LedgerConfig,
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    /// Load the ledger from the configured store, creating the store if absent
    pub fn load(config: LedgerConfig) -> TrackerResult<Self> {
        let records = load_records(config.data_file())?;
        Ok(Self { config, records })
    }

    /// Create a ledger over records that are already in memory
    pub fn from_records(config: LedgerConfig, records: Vec<ExpenseRecord>) -> Self {
        Self { config, records }
    }

    /// Rewrite the backing store with the current records
    pub fn save(&self) -> TrackerResult<()> {
        save_records(self.config.data_file(), &self.records)
    }

    /// Append a validated expense
    pub fn add_expense(&mut self, expense: &Expense) {
        let record = expense.to_record(&self.config.date_format);
        debug!("adding expense {:?}", record);
        self.records.push(record);
    }

    /// Drop every record with an empty field, returning how many were dropped
    pub fn prune_invalid(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(ExpenseRecord::is_complete);

        let pruned = before - self.records.len();
        if pruned > 0 {
            debug!("pruned {} invalid rows", pruned);
        }
        pruned
    }

    /// Prune, then render the surviving records as a table
    pub fn view(&mut self) -> String {
        self.prune_invalid();
        format_expense_table(&self.records)
    }

    /// Records in append order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Date format every record is validated against
    pub fn date_format(&self) -> &str {
        &self.config.date_format
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
