//! Terminal setup and teardown
//!
//! Initializes raw mode and the alternate screen, and installs a panic hook
//! that restores the terminal before the panic message is printed.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::storage::ExpenseStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// `initial_status` is shown in the status bar on the first frame, e.g. a
/// warning that the data file could not be read.
pub fn run_tui(store: &mut ExpenseStore, initial_status: Option<String>) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(store);
    if let Some(message) = initial_status {
        app.set_error(message);
    }

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;

        // The reader thread only exits when the terminal fails
        let event = match events.next() {
            Ok(event) => event,
            Err(_) => break,
        };
        handle_event(app, event);
    }

    tracing::debug!("TUI event loop finished");
    Ok(())
}
