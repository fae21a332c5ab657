//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, LoadOutcome, FORMAT_VERSION};
pub use file_io::{read_json, write_json_atomic};
