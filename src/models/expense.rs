//! Expense model
//!
//! A single recorded expense. Fields are private: once built, an expense is
//! only ever read or removed, never edited.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::Category;

/// Date format used for all user-facing dates
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// One user-entered expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    amount: Amount,
    date: NaiveDate,
    category: Category,
    #[serde(default)]
    description: String,
}

impl Expense {
    /// Create a new expense
    ///
    /// The description is only kept for [`Category::Miscellaneous`]; any
    /// other category stores an empty one.
    pub fn new(
        amount: Amount,
        date: NaiveDate,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        let description = if category.takes_description() {
            description.into()
        } else {
            String::new()
        };

        Self {
            amount,
            date,
            category,
            description,
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Date rendered as dd/MM/yyyy
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}: {}",
            self.formatted_date(),
            self.category,
            self.amount
        )?;

        if self.category.takes_description() {
            write!(f, " ({})", self.description)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display() {
        let expense = Expense::new(Amount::new(12.5), date(2024, 12, 31), Category::Food, "");
        assert_eq!(expense.to_string(), "31/12/2024 | Food: $12.5");
    }

    #[test]
    fn test_display_miscellaneous_includes_description() {
        let expense = Expense::new(
            Amount::new(40.0),
            date(2024, 3, 5),
            Category::Miscellaneous,
            "Birthday gift",
        );
        assert_eq!(
            expense.to_string(),
            "05/03/2024 | Miscellaneous: $40.0 (Birthday gift)"
        );
    }

    #[test]
    fn test_description_dropped_for_other_categories() {
        let expense = Expense::new(
            Amount::new(3.0),
            date(2024, 1, 1),
            Category::Transport,
            "bus",
        );
        assert_eq!(expense.description(), "");
        assert_eq!(expense.to_string(), "01/01/2024 | Transport: $3.0");
    }

    #[test]
    fn test_accessors() {
        let expense = Expense::new(
            Amount::new(7.25),
            date(2023, 6, 15),
            Category::Entertainment,
            "",
        );
        assert_eq!(expense.amount(), Amount::new(7.25));
        assert_eq!(expense.date(), date(2023, 6, 15));
        assert_eq!(expense.category(), Category::Entertainment);
        assert_eq!(expense.formatted_date(), "15/06/2023");
    }

    #[test]
    fn test_serialization_shape() {
        let expense = Expense::new(Amount::new(12.5), date(2024, 12, 31), Category::Food, "");
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["amount"], 12.5);
        assert_eq!(value["date"], "2024-12-31");
        assert_eq!(value["category"], "Food");
        assert_eq!(value["description"], "");
    }
}
