//! Undo/redo history of calculator snapshots.
//!
//! Two stacks: `undo` holds every reachable state oldest first, with the
//! current state on top; `redo` holds undone states, most recent on top.
//! The bottom of `undo` is the genesis state and is never popped.
//! Saving a new state discards everything on `redo`.

use crate::model::Snapshot;

/// Stores snapshots for the calculator without interpreting them.
#[derive(Debug, Default)]
pub struct HistoryManager {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new current state and drop any redo history.
    pub fn save(&mut self, snapshot: Snapshot) {
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// Step back one state.
    ///
    /// Returns the state to restore, or `None` when only the genesis
    /// state remains.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.undo.len() < 2 {
            return None;
        }
        let current = self.undo.pop()?;
        self.redo.push(current);
        self.undo.last().copied()
    }

    /// Step forward to the most recently undone state.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let snapshot = self.redo.pop()?;
        self.undo.push(snapshot);
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        self.undo.len() >= 2
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_with(states: &[f64]) -> HistoryManager {
        let mut history = HistoryManager::new();
        for &s in states {
            history.save(Snapshot::new(s));
        }
        history
    }

    #[test]
    fn undo_returns_previous_state() {
        let mut history = history_with(&[0.0, 15.0, 12.0]);

        assert_eq!(history.undo(), Some(Snapshot::new(15.0)));
        assert_eq!(history.undo(), Some(Snapshot::new(0.0)));
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.redo_len(), 2);
    }

    #[test]
    fn undo_never_pops_genesis() {
        let mut history = history_with(&[0.0]);

        assert_eq!(history.undo(), None);
        assert_eq!(history.undo(), None);
        assert_eq!(history.undo_len(), 1);
        assert!(!history.can_undo());
    }

    #[test]
    fn undo_on_empty_history_is_none() {
        let mut history = HistoryManager::new();
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn redo_replays_undone_states_in_order() {
        let mut history = history_with(&[0.0, 15.0, 12.0]);
        history.undo();
        history.undo();

        assert_eq!(history.redo(), Some(Snapshot::new(15.0)));
        assert_eq!(history.redo(), Some(Snapshot::new(12.0)));
        assert_eq!(history.redo(), None);
        assert_eq!(history.undo_len(), 3);
    }

    #[test]
    fn save_discards_redo_branch() {
        let mut history = history_with(&[0.0, 15.0, 20.0]);
        history.undo();
        assert!(history.can_redo());

        history.save(Snapshot::new(20.0));

        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
        assert_eq!(history.undo_len(), 3);
    }
}
