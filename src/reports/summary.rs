//! Expense Summary
//!
//! Per-category and grand totals, recomputed from scratch on every call.

use crate::models::{Amount, Category, Expense};

/// Totals for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Amount,
    pub count: usize,
}

/// Summary of a list of expenses
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// One entry per category, in [`Category::ALL`] order
    pub categories: [CategoryTotal; 4],
    /// Total across all expenses
    pub grand_total: Amount,
    /// Number of expenses summarized
    pub expense_count: usize,
}

impl Summary {
    /// Compute totals in a single pass over `expenses`
    pub fn generate(expenses: &[Expense]) -> Self {
        let mut categories = Category::ALL.map(|category| CategoryTotal {
            category,
            total: Amount::zero(),
            count: 0,
        });
        let mut grand_total = Amount::zero();

        for expense in expenses {
            let entry = &mut categories[expense.category().index()];
            entry.total += expense.amount();
            entry.count += 1;
            grand_total += expense.amount();
        }

        Self {
            categories,
            grand_total,
            expense_count: expenses.len(),
        }
    }

    /// Summary lines: one per category with a positive total, then the grand total
    pub fn lines(&self) -> Vec<String> {
        self.categories
            .iter()
            .filter(|c| c.total.is_positive())
            .map(|c| format!("{}: {}", c.category, c.total))
            .chain(std::iter::once(format!("Grand Total: {}", self.grand_total)))
            .collect()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        for line in self.lines() {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Format with per-category expense counts
    pub fn format_detailed(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Expense Summary ({} expenses)\n",
            self.expense_count
        ));
        output.push_str(&"=".repeat(40));
        output.push('\n');

        for c in self.categories.iter().filter(|c| c.total.is_positive()) {
            output.push_str(&format!(
                "{:<15} {:>15} {:>6}\n",
                c.category.name(),
                c.total.to_string(),
                format!("({})", c.count)
            ));
        }

        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<15} {:>15}\n",
            "Grand Total",
            self.grand_total.to_string()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(amount: f64, category: Category) -> Expense {
        Expense::new(
            Amount::new(amount),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            category,
            "",
        )
    }

    #[test]
    fn test_category_totals() {
        let expenses = vec![
            expense(10.0, Category::Food),
            expense(5.0, Category::Food),
            expense(20.0, Category::Transport),
        ];
        let summary = Summary::generate(&expenses);

        assert_eq!(
            summary.lines(),
            vec!["Food: $15.0", "Transport: $20.0", "Grand Total: $35.0"]
        );
        assert_eq!(summary.categories[Category::Food.index()].total, Amount::new(15.0));
        assert_eq!(summary.categories[0].count, 2);
        assert_eq!(summary.expense_count, 3);
    }

    #[test]
    fn test_empty_still_has_grand_total() {
        let summary = Summary::generate(&[]);
        assert_eq!(summary.lines(), vec!["Grand Total: $0.0"]);
        assert_eq!(summary.format_terminal(), "Grand Total: $0.0\n");
    }

    #[test]
    fn test_fixed_category_order() {
        let expenses = vec![
            expense(1.0, Category::Miscellaneous),
            expense(2.0, Category::Entertainment),
            expense(3.0, Category::Food),
        ];
        let lines = Summary::generate(&expenses).lines();

        assert_eq!(
            lines,
            vec![
                "Food: $3.0",
                "Entertainment: $2.0",
                "Miscellaneous: $1.0",
                "Grand Total: $6.0"
            ]
        );
    }

    #[test]
    fn test_non_positive_totals_omitted() {
        let expenses = vec![
            expense(-5.0, Category::Food),
            expense(0.0, Category::Transport),
            expense(8.0, Category::Entertainment),
        ];
        let lines = Summary::generate(&expenses).lines();

        // Negative amounts still count towards the grand total
        assert_eq!(lines, vec!["Entertainment: $8.0", "Grand Total: $3.0"]);
    }

    #[test]
    fn test_recomputed_each_time() {
        let mut expenses = vec![expense(1.0, Category::Food)];
        let first = Summary::generate(&expenses);
        expenses.push(expense(2.0, Category::Food));
        let second = Summary::generate(&expenses);

        assert_eq!(first.grand_total, Amount::new(1.0));
        assert_eq!(second.grand_total, Amount::new(3.0));
    }

    #[test]
    fn test_format_detailed() {
        let summary = Summary::generate(&[expense(10.0, Category::Food)]);
        let output = summary.format_detailed();

        assert!(output.starts_with("Expense Summary (1 expenses)\n"));
        assert!(output.contains("Food"));
        assert!(output.contains("$10.0"));
        assert!(output.contains("(1)"));
        assert!(output.contains("Grand Total"));
    }
}
