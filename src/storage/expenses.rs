//! Expense store backed by a single JSON file
//!
//! The in-memory list is authoritative. Every mutation rewrites the whole
//! file; a failed write is returned to the caller but never rolled back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Version of the on-disk record shape
pub const FORMAT_VERSION: u32 = 1;

/// On-disk layout of the expense file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ExpenseFile {
    version: u32,
    expenses: Vec<Expense>,
}

impl Default for ExpenseFile {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            expenses: Vec::new(),
        }
    }
}

/// Borrowed view used when writing, so persisting never clones the list
#[derive(Serialize)]
struct ExpenseFileRef<'a> {
    version: u32,
    expenses: &'a [Expense],
}

/// What `load` found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file existed; an empty one was created
    Created,
    /// The file was read and held this many expenses
    Loaded(usize),
}

/// Ordered collection of expenses mirrored to a file
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    pretty: bool,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store for the given file. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
            expenses: Vec::new(),
        }
    }

    /// Choose between pretty-printed and compact JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load expenses from disk, replacing whatever is in memory
    ///
    /// A missing file is created holding an empty list. On any error the
    /// in-memory list is left empty.
    pub fn load(&mut self) -> ExpenseResult<LoadOutcome> {
        self.expenses.clear();

        if !self.path.exists() {
            write_json_atomic(&self.path, &ExpenseFile::default(), self.pretty)?;
            debug!(path = %self.path.display(), "created empty expense file");
            return Ok(LoadOutcome::Created);
        }

        let file: ExpenseFile = read_json(&self.path)?;
        if file.version > FORMAT_VERSION {
            return Err(ExpenseError::Storage(format!(
                "Unsupported expense file version {} in {} (expected {})",
                file.version,
                self.path.display(),
                FORMAT_VERSION
            )));
        }

        self.expenses = file.expenses;
        debug!(
            path = %self.path.display(),
            count = self.expenses.len(),
            "loaded expenses"
        );
        Ok(LoadOutcome::Loaded(self.expenses.len()))
    }

    /// Write the full list to disk, overwriting the file
    pub fn persist(&self) -> ExpenseResult<()> {
        let file = ExpenseFileRef {
            version: FORMAT_VERSION,
            expenses: &self.expenses,
        };

        write_json_atomic(&self.path, &file, self.pretty).inspect_err(|e| {
            warn!(path = %self.path.display(), error = %e, "failed to persist expenses");
        })?;

        debug!(count = self.expenses.len(), "persisted expenses");
        Ok(())
    }

    /// Append an expense and persist
    ///
    /// The expense stays in memory even if persisting fails.
    pub fn add(&mut self, expense: Expense) -> ExpenseResult<()> {
        self.expenses.push(expense);
        self.persist()
    }

    /// Remove the expense at `index` and persist
    ///
    /// `None` or an out-of-range index is a [`ExpenseError::NoSelection`] and
    /// leaves the store untouched. If persisting fails the removal still stands.
    pub fn delete_at(&mut self, index: Option<usize>) -> ExpenseResult<Expense> {
        let index = index
            .filter(|&i| i < self.expenses.len())
            .ok_or(ExpenseError::NoSelection)?;

        let removed = self.expenses.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// All expenses in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
