//! Expense table formatting
//!
//! Renders ledger rows as a bordered, left-aligned table with the fixed
//! Date/Category/Amount/Description header. Rules are drawn only around the
//! frame and under the header.

use tabled::builder::Builder;
use tabled::settings::object::Segment;
use tabled::settings::style::HorizontalLine;
use tabled::settings::{Alignment, Style};

use crate::models::{ExpenseRecord, FIELDNAMES};

/// Format records as a table, header first, in the order given
pub fn format_expense_table(records: &[ExpenseRecord]) -> String {
    let mut builder = Builder::default();
    builder.push_record(FIELDNAMES);
    for record in records {
        builder.push_record(record.fields());
    }

    let style = Style::ascii()
        .remove_horizontal()
        .horizontals([(1, HorizontalLine::inherit(Style::ascii()))]);

    let mut table = builder.build();
    table
        .with(style)
        .modify(Segment::all(), Alignment::left());

    table.to_string()
}
