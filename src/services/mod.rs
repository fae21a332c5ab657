//! Business logic layer
//!
//! Services sit between the presentation layers (CLI and TUI) and storage.

pub mod expense;

pub use expense::{parse_amount, parse_date, ExpenseInput, ExpenseService};
