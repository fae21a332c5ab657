//! Expense Tracker - record daily expenses by category
//!
//! This library provides the core of a small personal expense tracker: an
//! entry form (terminal UI or command line), a list of recorded expenses that
//! is persisted to a JSON file after every change, and a per-category summary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (amount, category, expense)
//! - `storage`: JSON file storage with atomic writes
//! - `services`: Input validation and the add/delete/summary operations
//! - `reports`: Per-category totals
//! - `display`: Terminal formatting for the CLI
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::services::{ExpenseInput, ExpenseService};
//! use expense_tracker::storage::ExpenseStore;
//! use expense_tracker::models::Category;
//!
//! let mut store = ExpenseStore::new("expenses.json");
//! store.load()?;
//!
//! let input = ExpenseInput::new("12.50", "31/12/2024", Some(Category::Food), "");
//! ExpenseService::new(&mut store).add(&input)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
