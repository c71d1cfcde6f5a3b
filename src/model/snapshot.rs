//! Snapshot: a captured calculator result.

/// Immutable capture of the calculator's current result.
///
/// Knows nothing about how the value was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    state: f64,
}

impl Snapshot {
    pub fn new(state: f64) -> Self {
        Self { state }
    }

    /// The captured result.
    pub fn state(self) -> f64 {
        self.state
    }
}
