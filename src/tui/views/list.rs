//! Expense list view
//!
//! One row per recorded expense, in insertion order.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::models::Category;
use crate::tui::app::{App, FocusedPanel};

/// Render the expense list
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::List;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::White
    };

    let expenses = app.store.all();

    let block = Block::default()
        .title(format!(" Expenses ({}) ", expenses.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let widths = [
        Constraint::Length(4),  // #
        Constraint::Length(12), // Date
        Constraint::Length(15), // Category
        Constraint::Length(12), // Amount
        Constraint::Min(10),    // Description
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("#").style(bold),
        Cell::from("Date").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Description").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = expenses
        .iter()
        .enumerate()
        .map(|(i, expense)| {
            let amount_style = if expense.amount().is_positive() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            let category_style = match expense.category() {
                Category::Miscellaneous => Style::default().fg(Color::Magenta),
                _ => Style::default(),
            };

            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(expense.formatted_date()),
                Cell::from(expense.category().name()).style(category_style),
                Cell::from(expense.amount().to_string()).style(amount_style),
                Cell::from(expense.description().to_string()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(app.selected_index);
    }

    frame.render_stateful_widget(table, area, &mut state);
}
