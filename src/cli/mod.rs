//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;

pub use expense::{
    handle_add_command, handle_delete_command, handle_list_command, handle_summary_command,
    AddArgs, ListArgs, SummaryArgs,
};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
