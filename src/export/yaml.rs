//! YAML Export functionality
//!
//! Human-readable copy of the expense list.

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::models::Expense;
use std::io::Write;

/// Export expenses to YAML format
pub fn export_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_expenses(expenses);

    writeln!(writer, "# Expense Tracker Export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> ExpenseResult<ExpenseExport> {
    let export: ExpenseExport =
        serde_yaml::from_str(yaml_str).map_err(|e| ExpenseError::Export(e.to_string()))?;

    export.validate().map_err(ExpenseError::Export)?;

    Ok(export)
}
