//! Status bar view
//!
//! Shows the last status message, or key hints for the focused panel.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FocusedPanel, StatusMessage};

const FORM_HINTS: &str = " Enter:Add  Tab:Next field  Esc:List  Ctrl+C:Quit ";
const LIST_HINTS: &str = " j/k:Move  d:Delete  s:Summary  a:Add  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    match &app.status {
        Some(StatusMessage::Info(message)) => {
            spans.push(Span::styled(
                format!(" {}", message),
                Style::default().fg(Color::Green),
            ));
        }
        Some(StatusMessage::Error(message)) => {
            spans.push(Span::styled(
                format!(" {}", message),
                Style::default().fg(Color::Red),
            ));
        }
        None => {}
    }

    let hints = match app.focused_panel {
        FocusedPanel::Form => FORM_HINTS,
        FocusedPanel::List => LIST_HINTS,
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
