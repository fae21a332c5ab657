//! CLI command for data export

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{
    export_expenses_csv, export_json, export_yaml, import_from_json, import_from_yaml,
};
use crate::storage::ExpenseStore;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (spreadsheet-friendly)
    Csv,
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle `export`
pub fn handle_export_command(store: &ExpenseStore, args: ExportArgs) -> ExpenseResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_expenses_csv(store.all(), &mut writer)?,
        ExportFormat::Json => export_json(store.all(), &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_yaml(store.all(), &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    drop(writer);

    verify_export(store, &args)?;

    println!(
        "Exported {} expenses to: {}",
        store.len(),
        args.output.display()
    );
    Ok(())
}

/// Read a JSON or YAML export back and check it matches the store
fn verify_export(store: &ExpenseStore, args: &ExportArgs) -> ExpenseResult<()> {
    let read_back = match args.format {
        ExportFormat::Csv => return Ok(()),
        ExportFormat::Json => import_from_json(&read_output(&args.output)?)?,
        ExportFormat::Yaml => import_from_yaml(&read_output(&args.output)?)?,
    };

    if read_back.expenses != store.all() {
        return Err(ExpenseError::Export(format!(
            "Export verification failed: {} does not match the stored expenses",
            args.output.display()
        )));
    }
    Ok(())
}

fn read_output(path: &Path) -> ExpenseResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to read back {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category, Expense};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_with_expenses(temp_dir: &TempDir) -> ExpenseStore {
        let mut store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        store
            .add(Expense::new(Amount::new(12.5), date, Category::Food, ""))
            .unwrap();
        store
            .add(Expense::new(Amount::new(1e16), date, Category::Miscellaneous, "Yacht"))
            .unwrap();
        store
    }

    #[test]
    fn test_json_and_yaml_exports_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_with_expenses(&temp_dir);

        let outputs = [
            (ExportFormat::Json, "out.json"),
            (ExportFormat::Yaml, "out.yaml"),
        ];
        for (format, name) in outputs {
            let output = temp_dir.path().join(name);
            let args = ExportArgs {
                output: output.clone(),
                format,
                pretty: true,
            };
            handle_export_command(&store, args).unwrap();
            assert!(output.exists());
        }
    }

    #[test]
    fn test_verify_rejects_mismatched_output() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_with_expenses(&temp_dir);
        let output = temp_dir.path().join("out.json");

        let mut buffer = Vec::new();
        export_json(&store.all()[..1], &mut buffer, false).unwrap();
        std::fs::write(&output, buffer).unwrap();

        let args = ExportArgs {
            output,
            format: ExportFormat::Json,
            pretty: false,
        };
        assert!(matches!(
            verify_export(&store, &args),
            Err(ExpenseError::Export(_))
        ));
    }
}
