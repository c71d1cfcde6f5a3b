//! Calculation: one completed operation and its result.

use std::fmt;

use crate::operation::Operation;

/// Two operands, the operation applied to them, and the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub a: f64,
    pub b: f64,
    pub operation: Operation,
    pub result: f64,
}

impl Calculation {
    pub fn new(a: f64, b: f64, operation: Operation, result: f64) -> Self {
        Self {
            a,
            b,
            operation,
            result,
        }
    }
}

impl fmt::Display for Calculation {
    /// Renders as `10.0 add 5.0 = 15.0`, naming the operation in lowercase
    /// (`integerdivide`, `absolutedifference`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            format_number(self.a),
            self.operation.display_name().to_ascii_lowercase(),
            format_number(self.b),
            format_number(self.result)
        )
    }
}

/// Render a number with at least one fractional digit (`15.0`, `2.5`).
pub fn format_number(value: f64) -> String {
    // `Debug` keeps the trailing `.0` that `Display` drops.
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_operands_operation_and_result() {
        let calc = Calculation::new(10.0, 5.0, Operation::Add, 15.0);
        assert_eq!(calc.to_string(), "10.0 add 5.0 = 15.0");
    }

    #[test]
    fn renders_lowercased_operation_name() {
        let cases = [
            (Operation::IntegerDivide, "7.0 integerdivide 2.0 = 3.0"),
            (Operation::Percentage, "7.0 percentage 2.0 = 3.0"),
            (Operation::AbsoluteDifference, "7.0 absolutedifference 2.0 = 3.0"),
        ];
        for (op, expected) in cases {
            let calc = Calculation::new(7.0, 2.0, op, 3.0);
            assert_eq!(calc.to_string(), expected);
        }
    }

    #[test]
    fn renders_fractions_and_negatives() {
        let calc = Calculation::new(-1.5, 0.25, Operation::Multiply, -0.375);
        assert_eq!(calc.to_string(), "-1.5 multiply 0.25 = -0.375");
    }
}
