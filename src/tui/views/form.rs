//! Expense entry form
//!
//! Amount, date, category selector, and a description field that is only
//! editable for miscellaneous expenses.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::services::ExpenseInput;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Amount,
    Date,
    Category,
    Description,
}

/// State for the expense entry form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: FormField,
    pub amount_input: TextInput,
    pub date_input: TextInput,
    pub category: Category,
    pub description_input: TextInput,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: FormField::Amount,
            amount_input: TextInput::new().label("Amount").placeholder("12.50"),
            date_input: TextInput::new().label("Date").placeholder("dd/MM/yyyy"),
            category: Category::Food,
            description_input: TextInput::new().label("Description"),
        };
        state.update_focus();
        state
    }

    fn description_enabled(&self) -> bool {
        self.category.takes_description()
    }

    /// Move to the next field, skipping the description unless it is enabled
    pub fn next_field(&mut self) {
        self.focused_field = match self.focused_field {
            FormField::Amount => FormField::Date,
            FormField::Date => FormField::Category,
            FormField::Category if self.description_enabled() => FormField::Description,
            FormField::Category | FormField::Description => FormField::Amount,
        };
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = match self.focused_field {
            FormField::Amount if self.description_enabled() => FormField::Description,
            FormField::Amount => FormField::Category,
            FormField::Date => FormField::Amount,
            FormField::Category => FormField::Date,
            FormField::Description => FormField::Category,
        };
        self.update_focus();
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: FormField) {
        self.focused_field = field;
        self.update_focus();
    }

    /// Clear focus highlighting (form is not the active panel)
    pub fn blur(&mut self) {
        self.amount_input.focused = false;
        self.date_input.focused = false;
        self.description_input.focused = false;
    }

    fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == FormField::Amount;
        self.date_input.focused = self.focused_field == FormField::Date;
        self.description_input.focused = self.focused_field == FormField::Description;
        self.description_input.disabled = !self.description_enabled();
        self.description_input.placeholder = if self.description_enabled() {
            "What was it?".to_string()
        } else {
            "(Miscellaneous only)".to_string()
        };
    }

    /// Change the selected category
    ///
    /// Leaving Miscellaneous clears the description.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        if !category.takes_description() {
            self.description_input.clear();
        }
        self.update_focus();
    }

    pub fn next_category(&mut self) {
        self.select_category(self.category.next());
    }

    pub fn prev_category(&mut self) {
        self.select_category(self.category.prev());
    }

    /// The focused text input, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Amount => Some(&mut self.amount_input),
            FormField::Date => Some(&mut self.date_input),
            FormField::Category => None,
            FormField::Description => Some(&mut self.description_input),
        }
    }

    /// Snapshot the raw field values
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput::new(
            self.amount_input.value(),
            self.date_input.value(),
            Some(self.category),
            self.description_input.value(),
        )
    }

    /// Reset after a successful add: text fields clear, category stays
    pub fn clear_after_add(&mut self) {
        self.amount_input.clear();
        self.date_input.clear();
        self.description_input.clear();
        self.set_focus(FormField::Amount);
    }
}

/// Render the form panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Form;
    let border_color = if focused { Color::Cyan } else { Color::White };

    let block = Block::default()
        .title(" Add Expense ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Description
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.form;
    frame.render_widget(&form.amount_input, chunks[0]);
    frame.render_widget(&form.date_input, chunks[1]);
    render_category(frame, form, focused, chunks[2]);
    frame.render_widget(&form.description_input, chunks[3]);

    if focused {
        let hints = Line::from(vec![
            Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
            Span::raw(" Next  "),
            Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
            Span::raw(" Category  "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Add  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" List"),
        ]);
        frame.render_widget(Paragraph::new(hints), chunks[4]);
    }
}

fn render_category(frame: &mut Frame, form: &ExpenseFormState, panel_focused: bool, area: Rect) {
    let focused = panel_focused && form.focused_field == FormField::Category;
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let line = Line::from(vec![
        Span::styled(format!("{:>12}: ", "Category"), label_style),
        Span::styled(format!("◀ {} ▶", form.category), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
