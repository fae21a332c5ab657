//! Reports module
//!
//! Derived views over the stored expenses.

pub mod summary;

pub use summary::{CategoryTotal, Summary};
