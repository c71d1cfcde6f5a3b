//! History record: the persisted form of a calculation.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::operation::{self, Operation};

use super::Calculation;

/// One line of a history file.
///
/// The operation is stored by name and re-resolved through the registry
/// when the record is turned back into a [`Calculation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub timestamp: Timestamp,
    pub operation_name: String,
    pub operand_a: f64,
    pub operand_b: f64,
    pub result: f64,
}

impl HistoryRecord {
    /// Record a calculation as of now.
    pub fn from_calculation(calc: &Calculation) -> Self {
        Self::at(calc, Timestamp::now())
    }

    pub fn at(calc: &Calculation, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            operation_name: calc.operation.command_name().to_string(),
            operand_a: calc.a,
            operand_b: calc.b,
            result: calc.result,
        }
    }

    /// Rebuild the calculation, resolving the operation by name.
    pub fn to_calculation(&self) -> operation::Result<Calculation> {
        let op = Operation::from_name(&self.operation_name)?;
        Ok(Calculation::new(
            self.operand_a,
            self.operand_b,
            op,
            self.result,
        ))
    }
}
