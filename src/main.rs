use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_add_command, handle_delete_command, handle_export_command, handle_list_command,
    handle_summary_command, AddArgs, ExportArgs, ListArgs, SummaryArgs,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::{ExpenseStore, LoadOutcome};

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Record daily expenses by category and see where the money went",
    long_about = "A small personal expense tracker. Record expenses with an amount, \
                  a date and a category, list or delete them, and print per-category \
                  totals. Use the `tui` command for the interactive form."
)]
struct Cli {
    /// Expense file to use instead of the configured one
    #[arg(long, env = "EXPENSES_FILE", global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List recorded expenses
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete an expense by its position in `list`
    #[command(alias = "rm")]
    Delete {
        /// Position shown by `list` (starting at 1)
        position: usize,
    },

    /// Show totals per category
    Summary(SummaryArgs),

    /// Export expenses to a file
    Export(ExportArgs),

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Create the data directory, settings file and an empty expense file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&paths, &settings, matches!(cli.command, Some(Commands::Tui)));

    let expenses_file = settings.resolve_expenses_file(&paths, cli.file);
    let mut store = ExpenseStore::new(expenses_file).with_pretty(settings.pretty_json);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            match store.load()? {
                LoadOutcome::Created => {
                    println!("Created expense file: {}", store.path().display())
                }
                LoadOutcome::Loaded(count) => println!(
                    "Using existing expense file: {} ({} expenses)",
                    store.path().display(),
                    count
                ),
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expense file:   {}", store.path().display());
            println!("Log file:       {}", paths.log_file().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() { "yes" } else { "no (run 'expenses init')" }
            );
            println!();
            println!("Settings:");
            println!("  Log level:   {}", settings.log_level);
            println!("  Pretty JSON: {}", settings.pretty_json);
        }
        Some(command) => {
            let load_error = load_store(&mut store);
            run_command(&mut store, command, load_error)?;
        }
        None => {
            println!("Expense Tracker - record daily expenses by category");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses tui' to launch the interactive form.");
        }
    }

    Ok(())
}

fn run_command(store: &mut ExpenseStore, command: Commands, load_error: Option<String>) -> Result<()> {
    match command {
        Commands::Add(args) => handle_add_command(store, args)?,
        Commands::List(args) => handle_list_command(store, args)?,
        Commands::Delete { position } => handle_delete_command(store, position)?,
        Commands::Summary(args) => handle_summary_command(store, args)?,
        Commands::Export(args) => handle_export_command(store, args)?,
        Commands::Tui => expense_tracker::tui::run_tui(store, load_error)?,
        Commands::Init | Commands::Config => {}
    }
    Ok(())
}

/// Load the store, continuing with an empty list if the file can't be read
fn load_store(store: &mut ExpenseStore) -> Option<String> {
    match store.load() {
        Ok(_) => None,
        Err(e) => {
            tracing::error!(
                path = %store.path().display(),
                error = %e,
                "failed to load expenses, starting with an empty list"
            );
            Some(format!("Could not load expenses: {}", e))
        }
    }
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins over the configured level. While the TUI owns the
/// terminal, output goes to the log file instead of stderr.
fn init_logging(paths: &ExpensePaths, settings: &Settings, tui: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("expense_tracker={}", settings.log_level)));

    if tui {
        match open_log_file(paths) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .init();
            }
            Err(_) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::sink)
                    .init();
            }
        }
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn open_log_file(paths: &ExpensePaths) -> Result<std::fs::File> {
    std::fs::create_dir_all(paths.base_dir()).context("Failed to create base directory")?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .context("Failed to open log file")
}
