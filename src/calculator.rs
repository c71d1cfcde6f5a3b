//! The calculator: current result, undo/redo, and observer fan-out.
//!
//! Every successful [`Calculator::execute`] saves a [`Snapshot`] of the new
//! result and notifies observers. A failed one changes nothing: the result,
//! both history stacks, and the last calculation stay as they were.
//! Undo and redo never touch the operation registry; they only move
//! between snapshots.

use log::{debug, info, warn};

use crate::history::HistoryManager;
use crate::model::{Calculation, Snapshot};
use crate::observer::{CalculatorView, Observer, ObserverId};
use crate::operation::{self, Operation};

/// A single-session calculator.
pub struct Calculator {
    current_result: f64,
    history: HistoryManager,
    last_calculation: Option<Calculation>,
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_observer_id: u64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A calculator at 0.0, with that genesis state already in history.
    pub fn new() -> Self {
        let mut calculator = Self {
            current_result: 0.0,
            history: HistoryManager::new(),
            last_calculation: None,
            observers: Vec::new(),
            next_observer_id: 0,
        };
        let genesis = calculator.create_snapshot();
        calculator.history.save(genesis);
        calculator
    }

    pub fn current_result(&self) -> f64 {
        self.current_result
    }

    pub fn last_calculation(&self) -> Option<&Calculation> {
        self.last_calculation.as_ref()
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    // ── Snapshots ──

    /// Capture the current result.
    pub fn create_snapshot(&self) -> Snapshot {
        Snapshot::new(self.current_result)
    }

    /// Restore the current result from a snapshot.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.current_result = snapshot.state();
    }

    // ── Execution ──

    /// Run `operation_name` on `a` and `b`.
    ///
    /// On success the result becomes current, is saved to history, and
    /// observers are notified before this returns. On failure nothing
    /// changes and the error is returned.
    pub fn execute(
        &mut self,
        operation_name: &str,
        a: f64,
        b: f64,
    ) -> operation::Result<Calculation> {
        let op = Operation::from_name(operation_name)?;
        let result = op.calculate(a, b)?;

        self.current_result = result;
        let snapshot = self.create_snapshot();
        self.history.save(snapshot);
        let calculation = Calculation::new(a, b, op, result);
        self.last_calculation = Some(calculation);
        debug!("executed {calculation}");

        self.notify_observers(&calculation);
        Ok(calculation)
    }

    /// Step back to the previous result.
    ///
    /// Returns the restored result, or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<f64> {
        let snapshot = self.history.undo()?;
        self.restore(snapshot);
        debug!("undo: result is now {}", self.current_result);
        Some(self.current_result)
    }

    /// Step forward to the most recently undone result.
    ///
    /// Returns the restored result, or `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<f64> {
        let snapshot = self.history.redo()?;
        self.restore(snapshot);
        debug!("redo: result is now {}", self.current_result);
        Some(self.current_result)
    }

    // ── Observers ──

    /// Add an observer. Observers are notified in registration order.
    pub fn register_observer(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        info!("registered observer: {}", observer.name());
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer, returning it.
    ///
    /// Unknown handles are a no-op and return `None`.
    pub fn unregister_observer(&mut self, id: ObserverId) -> Option<Box<dyn Observer>> {
        let Some(index) = self.observers.iter().position(|(oid, _)| *oid == id) else {
            warn!("observer {id:?} not found; nothing to unregister");
            return None;
        };
        let (_, observer) = self.observers.remove(index);
        info!("unregistered observer: {}", observer.name());
        Some(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify_observers(&mut self, calculation: &Calculation) {
        let view = CalculatorView {
            last_calculation: calculation,
            current_result: self.current_result,
        };
        for (_, observer) in &mut self.observers {
            if let Err(e) = observer.update(&view) {
                warn!("observer {} failed: {e}", observer.name());
            }
        }
    }
}
