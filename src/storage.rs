//! Local persistence for calculation history.
//!
//! History files live under the configured history directory and hold one
//! [`HistoryRecord`] per line:
//!
//! ```text
//! <history-dir>/
//!   calculation_history.jsonl   # Rewritten by the auto-saver after each calculation
//!   manual_history.jsonl        # Written by `save`, read by `load`
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

// Trait must be in scope for `.lines()` on BufReader.
use io::BufRead;

use crate::model::{Calculation, HistoryRecord};
use crate::operation::OperationError;

/// File the auto-saver keeps current.
pub const AUTO_SAVE_FILE: &str = "calculation_history.jsonl";

/// File used by the `save` and `load` commands.
pub const MANUAL_SAVE_FILE: &str = "manual_history.jsonl";

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("history file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("line {line}: invalid record: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line}: {source}")]
    Operation {
        line: usize,
        source: OperationError,
    },
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// File-based storage for history records.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Full path of a history file under the storage root.
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `records` to `file_name`, replacing its previous contents.
    ///
    /// Returns the path written.
    pub fn save_history(&self, file_name: &str, records: &[HistoryRecord]) -> Result<PathBuf> {
        let mut contents = String::new();
        for record in records {
            contents.push_str(&serde_json::to_string(record)?);
            contents.push('\n');
        }
        let path = self.path(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Loads every record from `file_name`, skipping blank lines.
    pub fn load_history(&self, file_name: &str) -> Result<Vec<HistoryRecord>> {
        let path = self.path(file_name);
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(path));
            }
            Err(e) => return Err(e.into()),
        };
        let reader = io::BufReader::new(file);
        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).map_err(|source| StorageError::Json {
                line: index + 1,
                source,
            })?;
            records.push(record);
        }
        Ok(records)
    }

    /// Loads `file_name` and rebuilds each record as a calculation.
    ///
    /// Fails on the first record whose operation the registry does not know.
    pub fn load_calculations(&self, file_name: &str) -> Result<Vec<Calculation>> {
        self.load_history(file_name)?
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .to_calculation()
                    .map_err(|source| StorageError::Operation {
                        line: index + 1,
                        source,
                    })
            })
            .collect()
    }
}
