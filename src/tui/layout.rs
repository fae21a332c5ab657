//! Layout definitions for the TUI
//!
//! Form on top, expense list and summary side by side below it, status bar
//! at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the entry form including its border
const FORM_HEIGHT: u16 = 7;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Entry form
    pub form: Rect,
    /// Recorded expenses
    pub list: Rect,
    /// Category totals
    pub summary: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(32)])
            .split(vertical[1]);

        Self {
            form: vertical[0],
            list: horizontal[0],
            summary: horizontal[1],
            status_bar: vertical[2],
        }
    }
}
