//! Observers: collaborators notified after every successful calculation.
//!
//! The calculator owns its observers and calls them in registration order,
//! synchronously, before `execute` returns. Observers only get a read-only
//! [`CalculatorView`]; a failing observer is logged and skipped.

mod autosave;
mod logging;

use std::io;

use crate::model::Calculation;
use crate::storage::StorageError;

pub use autosave::AutoSaveObserver;
pub use logging::LoggingObserver;

/// Errors an observer can report back to the calculator.
#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// What an observer sees of the calculator after a calculation.
#[derive(Debug, Clone, Copy)]
pub struct CalculatorView<'a> {
    pub last_calculation: &'a Calculation,
    pub current_result: f64,
}

/// Something interested in calculator state changes.
pub trait Observer {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    fn update(&mut self, view: &CalculatorView<'_>) -> Result<(), ObserverError>;
}

/// Handle returned by registration, used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);
