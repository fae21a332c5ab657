//! Core data models for the expense tracker

pub mod amount;
pub mod category;
pub mod expense;

pub use amount::{Amount, AmountParseError, CURRENCY_SYMBOL};
pub use category::{Category, CategoryParseError};
pub use expense::{Expense, DATE_FORMAT};
