//! Export module for the expense tracker
//!
//! Provides export of the expense list in multiple formats:
//! - CSV: spreadsheet-compatible
//! - JSON: machine-readable, schema-versioned
//! - YAML: human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_json, import_from_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_yaml, import_from_yaml};
