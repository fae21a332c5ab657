//! Terminal User Interface module
//!
//! An entry form, the list of recorded expenses, and an on-demand summary,
//! drawn with ratatui over a crossterm backend.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
