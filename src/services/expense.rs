//! Expense service layer
//!
//! Turns raw form input into expenses and applies add/delete to the store.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ExpenseResult, ValidationError};
use crate::models::{Amount, Category, Expense, DATE_FORMAT};
use crate::reports::Summary;
use crate::storage::ExpenseStore;

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub amount: String,
    pub date: String,
    pub category: Option<Category>,
    pub description: String,
}

impl ExpenseInput {
    pub fn new(
        amount: impl Into<String>,
        date: impl Into<String>,
        category: Option<Category>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            date: date.into(),
            category,
            description: description.into(),
        }
    }

    /// Validate the input and build an expense
    ///
    /// Checks run in a fixed order: missing fields, then date, then amount.
    pub fn parse(&self) -> Result<Expense, ValidationError> {
        let category = match self.category {
            Some(category) if !self.amount.is_empty() && !self.date.is_empty() => category,
            _ => return Err(ValidationError::MissingFields),
        };

        let date = parse_date(&self.date)?;
        let amount = parse_amount(&self.amount)?;

        Ok(Expense::new(amount, date, category, self.description.as_str()))
    }
}

/// Parse a dd/MM/yyyy date
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

/// Parse a decimal amount
pub fn parse_amount(s: &str) -> Result<Amount, ValidationError> {
    Amount::parse(s).map_err(|_| ValidationError::InvalidAmount(s.to_string()))
}

/// Service for expense operations over a borrowed store
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self { store }
    }

    /// Validate input and add the resulting expense
    ///
    /// Validation errors leave the store untouched. A persistence error means
    /// the expense was added in memory but not saved.
    pub fn add(&mut self, input: &ExpenseInput) -> ExpenseResult<Expense> {
        let expense = input.parse()?;
        debug!(expense = %expense, "adding expense");
        self.store.add(expense.clone())?;
        Ok(expense)
    }

    /// Delete the expense at a 0-based index
    pub fn delete(&mut self, index: Option<usize>) -> ExpenseResult<Expense> {
        let removed = self.store.delete_at(index)?;
        debug!(expense = %removed, "deleted expense");
        Ok(removed)
    }

    /// Delete by 1-based display position
    pub fn delete_position(&mut self, position: usize) -> ExpenseResult<Expense> {
        self.delete(position.checked_sub(1))
    }

    pub fn list(&self) -> &[Expense] {
        self.store.all()
    }

    /// Compute a fresh summary of the current expenses
    pub fn summary(&self) -> Summary {
        Summary::generate(self.store.all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use tempfile::TempDir;

    fn input(amount: &str, date: &str, category: Option<Category>) -> ExpenseInput {
        ExpenseInput::new(amount, date, category, "")
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("31/12/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        assert!(matches!(
            parse_date("2024-12-31"),
            Err(ValidationError::InvalidDate(_))
        ));
        assert!(parse_date("31-12-2024").is_err());
        assert!(parse_date("32/01/2024").is_err());
        assert!(parse_date("31/12/2024 extra").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap().value(), 12.5);
        assert!(matches!(
            parse_amount("abc"),
            Err(ValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_missing_fields_checked_first() {
        let cat = Some(Category::Food);
        assert_eq!(
            input("", "31/12/2024", cat).parse(),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            input("12.50", "", cat).parse(),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            input("12.50", "31/12/2024", None).parse(),
            Err(ValidationError::MissingFields)
        );
        // Both invalid: missing wins over format
        assert_eq!(
            input("", "not a date", cat).parse(),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_date_checked_before_amount() {
        let result = input("abc", "2024-12-31", Some(Category::Food)).parse();
        assert!(matches!(result, Err(ValidationError::InvalidDate(_))));

        let result = input("abc", "31/12/2024", Some(Category::Food)).parse();
        assert!(matches!(result, Err(ValidationError::InvalidAmount(_))));
    }

    #[test]
    fn test_negative_and_zero_accepted() {
        let expense = input("-5", "01/01/2024", Some(Category::Food))
            .parse()
            .unwrap();
        assert_eq!(expense.amount().value(), -5.0);

        assert!(input("0", "01/01/2024", Some(Category::Food))
            .parse()
            .is_ok());
    }

    #[test]
    fn test_service_add_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        let mut service = ExpenseService::new(&mut store);

        let added = service
            .add(&ExpenseInput::new(
                "40",
                "05/03/2024",
                Some(Category::Miscellaneous),
                "Gift",
            ))
            .unwrap();
        assert_eq!(added.to_string(), "05/03/2024 | Miscellaneous: $40.0 (Gift)");
        assert_eq!(service.list().len(), 1);

        let err = service
            .add(&input("abc", "05/03/2024", Some(Category::Food)))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.list().len(), 1);

        assert!(matches!(
            service.delete_position(0),
            Err(ExpenseError::NoSelection)
        ));
        assert!(matches!(
            service.delete_position(2),
            Err(ExpenseError::NoSelection)
        ));

        let removed = service.delete_position(1).unwrap();
        assert_eq!(removed, added);
        assert!(service.list().is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_service_summary() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        let mut service = ExpenseService::new(&mut store);

        for (amount, category) in [
            ("10", Category::Food),
            ("5", Category::Food),
            ("20", Category::Transport),
        ] {
            service
                .add(&input(amount, "01/02/2024", Some(category)))
                .unwrap();
        }

        assert_eq!(
            service.summary().lines(),
            vec!["Food: $15.0", "Transport: $20.0", "Grand Total: $35.0"]
        );
    }
}
