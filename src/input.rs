//! Operand validation for calculation commands.
//!
//! Runs before anything reaches the calculator, so the calculator only
//! ever sees two finite numbers within the configured range.

/// Malformed or out-of-range operand input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("exactly two numerical arguments are required, got {0}")]
    WrongArgumentCount(usize),

    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    #[error("operands must be between -{max} and {max}, got {value}")]
    OutOfRange { value: f64, max: f64 },
}

/// Parse exactly two operands and check them against `max_input_value`.
pub fn validate_operands<S: AsRef<str>>(
    args: &[S],
    max_input_value: f64,
) -> Result<(f64, f64), ValidationError> {
    let [a, b] = args else {
        return Err(ValidationError::WrongArgumentCount(args.len()));
    };
    Ok((
        parse_operand(a.as_ref(), max_input_value)?,
        parse_operand(b.as_ref(), max_input_value)?,
    ))
}

fn parse_operand(raw: &str, max: f64) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber(raw.to_string()))?;
    if !value.is_finite() || value.abs() > max {
        return Err(ValidationError::OutOfRange { value, max });
    }
    Ok(value)
}
