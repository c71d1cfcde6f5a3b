//! Calculation log: one line per calculation, appended to a file.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use jiff::Zoned;

use crate::model::format_number;

use super::{CalculatorView, Observer, ObserverError};

/// Appends each calculation to the configured log file.
///
/// ```text
/// [2026-01-02 09:30:00] Operation: Add, Operands: (10.0, 5.0), Result: 15.0000
/// ```
#[derive(Debug)]
pub struct LoggingObserver {
    path: PathBuf,
    precision: usize,
}

impl LoggingObserver {
    pub fn new(path: impl Into<PathBuf>, precision: usize) -> Self {
        Self {
            path: path.into(),
            precision,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_entry(&self, view: &CalculatorView<'_>, timestamp: &str) -> String {
        let calc = view.last_calculation;
        format!(
            "[{timestamp}] Operation: {}, Operands: ({}, {}), Result: {:.prec$}\n",
            calc.operation.display_name(),
            format_number(calc.a),
            format_number(calc.b),
            calc.result,
            prec = self.precision,
        )
    }
}

impl Observer for LoggingObserver {
    fn name(&self) -> &'static str {
        "LoggingObserver"
    }

    fn update(&mut self, view: &CalculatorView<'_>) -> Result<(), ObserverError> {
        let timestamp = Zoned::now().strftime("%Y-%m-%d %H:%M:%S").to_string();
        let entry = self.format_entry(view, &timestamp);
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry.as_bytes())?;
        Ok(())
    }
}
