//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It borrows the store from the caller; nothing else holds expenses.

use crate::reports::Summary;
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

use super::views::form::ExpenseFormState;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Form,
    List,
}

/// A message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Main application state
pub struct App<'a> {
    /// The expense store
    pub store: &'a mut ExpenseStore,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Entry form state
    pub form: ExpenseFormState,

    /// Selected row in the expense list
    pub selected_index: Option<usize>,

    /// Last computed summary lines, if the summary has been requested
    pub summary_lines: Option<Vec<String>>,

    /// Status message to display
    pub status: Option<StatusMessage>,
}

impl<'a> App<'a> {
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self {
            store,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            form: ExpenseFormState::new(),
            selected_index: None,
            summary_lines: None,
            status: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Info(message.into()));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Error(message.into()));
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn focus_form(&mut self) {
        self.focused_panel = FocusedPanel::Form;
        self.form.set_focus(self.form.focused_field);
    }

    pub fn focus_list(&mut self) {
        self.focused_panel = FocusedPanel::List;
        self.form.blur();
        if self.selected_index.is_none() && !self.store.is_empty() {
            self.selected_index = Some(0);
        }
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.selected_index = Some(self.selected_index.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Validate the form and add the expense
    pub fn add_expense(&mut self) {
        let input = self.form.to_input();
        let result = ExpenseService::new(&mut *self.store).add(&input);

        match result {
            Ok(expense) => {
                self.form.clear_after_add();
                self.set_status(format!("Added: {}", expense));
            }
            Err(e) if e.is_persistence() => {
                self.form.clear_after_add();
                self.set_error(format!("Added, but could not save: {}", e));
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Delete the selected expense
    pub fn delete_selected(&mut self) {
        let result = ExpenseService::new(&mut *self.store).delete(self.selected_index);

        match result {
            Ok(removed) => {
                self.clamp_selection();
                self.set_status(format!("Deleted: {}", removed));
            }
            Err(e) if e.is_persistence() => {
                self.clamp_selection();
                self.set_error(format!("Deleted, but could not save: {}", e));
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Recompute the summary from the current expenses
    pub fn show_summary(&mut self) {
        self.summary_lines = Some(Summary::generate(self.store.all()).lines());
    }

    fn clamp_selection(&mut self) {
        let len = self.store.len();
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }
}
