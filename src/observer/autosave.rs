//! Auto-save: keeps the session's calculations on disk as they happen.

use crate::model::HistoryRecord;
use crate::storage::{AUTO_SAVE_FILE, Storage};

use super::{CalculatorView, Observer, ObserverError};

/// Records every calculation and rewrites the auto-save file.
///
/// Does nothing when disabled. Keeps at most `max_records`, dropping the
/// oldest first.
#[derive(Debug)]
pub struct AutoSaveObserver {
    storage: Storage,
    enabled: bool,
    max_records: usize,
    records: Vec<HistoryRecord>,
}

impl AutoSaveObserver {
    pub fn new(storage: Storage, enabled: bool, max_records: usize) -> Self {
        Self {
            storage,
            enabled,
            max_records,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }
}

impl Observer for AutoSaveObserver {
    fn name(&self) -> &'static str {
        "AutoSaveObserver"
    }

    fn update(&mut self, view: &CalculatorView<'_>) -> Result<(), ObserverError> {
        if !self.enabled {
            return Ok(());
        }

        self.records
            .push(HistoryRecord::from_calculation(view.last_calculation));
        if self.records.len() > self.max_records {
            let excess = self.records.len() - self.max_records;
            self.records.drain(..excess);
        }

        self.storage.save_history(AUTO_SAVE_FILE, &self.records)?;
        Ok(())
    }
}
