//! Expense display formatting
//!
//! Renders the expense list for terminal output.

use tabled::{settings::Style, Table, Tabled};

use crate::models::Expense;

/// One row of the expense table
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format expenses as a table with 1-based positions
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        position: i + 1,
        date: e.formatted_date(),
        category: e.category().to_string(),
        amount: e.amount().to_string(),
        description: e.description().to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format expenses as numbered display lines
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let width = expenses.len().to_string().len();
    let mut output = String::new();
    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format!("{:>width$}. {}\n", i + 1, expense, width = width));
    }
    output
}
