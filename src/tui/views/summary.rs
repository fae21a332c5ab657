//! Summary panel
//!
//! Shows the totals from the last time the summary was requested.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let lines: Vec<Line> = match &app.summary_lines {
        Some(summary) => summary
            .iter()
            .map(|line| {
                if line.starts_with("Grand Total") {
                    Line::from(Span::styled(
                        line.as_str(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(line.as_str())
                }
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            "Press s in the list to compute totals",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
