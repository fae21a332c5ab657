//! JSON Export functionality
//!
//! Exports the expense list to JSON with schema versioning.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full expense export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of exported expenses
    pub expense_count: usize,

    /// Earliest expense date, if any
    pub earliest_date: Option<NaiveDate>,

    /// Latest expense date, if any
    pub latest_date: Option<NaiveDate>,

    /// All expenses in display order
    pub expenses: Vec<Expense>,
}

impl ExpenseExport {
    /// Build an export snapshot of the given expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            earliest_date: expenses.iter().map(Expense::date).min(),
            latest_date: expenses.iter().map(Expense::date).max(),
            expenses: expenses.to_vec(),
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.expense_count != self.expenses.len() {
            return Err(format!(
                "Expense count mismatch: header says {}, found {}",
                self.expense_count,
                self.expenses.len()
            ));
        }

        Ok(())
    }
}

/// Export expenses to JSON
pub fn export_json<W: Write>(expenses: &[Expense], writer: &mut W, pretty: bool) -> ExpenseResult<()> {
    let export = ExpenseExport::from_expenses(expenses);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export (for verification)
pub fn import_from_json(json_str: &str) -> ExpenseResult<ExpenseExport> {
    let export: ExpenseExport =
        serde_json::from_str(json_str).map_err(|e| ExpenseError::Export(e.to_string()))?;

    export.validate().map_err(ExpenseError::Export)?;

    Ok(export)
}
