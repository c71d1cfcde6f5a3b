//! Core data model for the calculator.
//!
//! Calculations are what the user sees, snapshots are what undo and redo
//! move between, and history records are what lands on disk.

mod calculation;
mod record;
mod snapshot;

pub use calculation::{Calculation, format_number};
pub use record::HistoryRecord;
pub use snapshot::Snapshot;
