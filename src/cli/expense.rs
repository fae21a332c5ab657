//! Expense CLI commands
//!
//! Implements the add, list, delete and summary commands.

use clap::Args;

use crate::display::{format_expense_list, format_expense_table};
use crate::error::ExpenseResult;
use crate::models::Category;
use crate::reports::Summary;
use crate::services::{ExpenseInput, ExpenseService};
use crate::storage::ExpenseStore;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g. "12.50")
    #[arg(allow_negative_numbers = true)]
    pub amount: String,
    /// Date of the expense (dd/MM/yyyy)
    pub date: String,
    /// Category: food, transport, entertainment or miscellaneous
    #[arg(short, long)]
    pub category: Option<Category>,
    /// Description (kept for miscellaneous expenses only)
    #[arg(short, long, default_value = "")]
    pub description: String,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print one line per expense instead of a table
    #[arg(long)]
    pub plain: bool,
}

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Include expense counts per category
    #[arg(long)]
    pub detailed: bool,
}

/// Handle `add`
pub fn handle_add_command(store: &mut ExpenseStore, args: AddArgs) -> ExpenseResult<()> {
    let input = ExpenseInput::new(args.amount, args.date, args.category, args.description);
    let expense = ExpenseService::new(store).add(&input)?;

    println!("Added expense #{}: {}", store.len(), expense);
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(store: &ExpenseStore, args: ListArgs) -> ExpenseResult<()> {
    if args.plain {
        print!("{}", format_expense_list(store.all()));
    } else {
        print!("{}", format_expense_table(store.all()));
    }
    Ok(())
}

/// Handle `delete`, where `position` is the 1-based number shown by `list`
pub fn handle_delete_command(store: &mut ExpenseStore, position: usize) -> ExpenseResult<()> {
    let removed = ExpenseService::new(store).delete_position(position)?;
    println!("Deleted expense: {}", removed);
    Ok(())
}

/// Handle `summary`
pub fn handle_summary_command(store: &ExpenseStore, args: SummaryArgs) -> ExpenseResult<()> {
    let summary = Summary::generate(store.all());

    if args.detailed {
        print!("{}", summary.format_detailed());
    } else {
        print!("{}", summary.format_terminal());
    }
    Ok(())
}
