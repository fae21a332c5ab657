//! Event handler for the TUI
//!
//! Routes keyboard events to the form or the expense list depending on
//! which panel has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, FocusedPanel};
use super::event::Event;
use super::views::form::FormField;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Some platforms also report key releases
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.focused_panel {
        FocusedPanel::Form => handle_form_key(app, key),
        FocusedPanel::List => handle_list_key(app, key),
    }
}

/// Handle keys while the entry form is focused
fn handle_form_key(app: &mut App, key: KeyEvent) {
    let on_category = app.form.focused_field == FormField::Category;

    match key.code {
        KeyCode::Esc => app.focus_list(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => app.form.prev_field(),
        KeyCode::Tab => app.form.next_field(),
        KeyCode::BackTab => app.form.prev_field(),
        KeyCode::Up => app.form.prev_field(),
        KeyCode::Down => app.form.next_field(),
        KeyCode::Enter => app.add_expense(),
        KeyCode::Left if on_category => app.form.prev_category(),
        KeyCode::Right if on_category => app.form.next_category(),
        _ => {
            if let Some(input) = app.form.focused_input() {
                edit_input(input, key.code);
                if matches!(key.code, KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete) {
                    app.clear_status();
                }
            }
        }
    }
}

fn edit_input(input: &mut super::widgets::TextInput, code: KeyCode) {
    match code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

/// Handle keys while the expense list is focused
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('s') => app.show_summary(),
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => app.focus_form(),
        _ => {}
    }
}
