//! CSV Export functionality
//!
//! Spreadsheet-friendly copy of the expense list.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use std::io::Write;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Date", "Category", "Amount", "Description"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.formatted_date(),
                expense.category().to_string(),
                expense.amount().format_plain(),
                expense.description().to_string(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
