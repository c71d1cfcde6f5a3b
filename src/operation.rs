//! Operation registry: maps command names to binary arithmetic.
//!
//! Every operation is a stateless variant of [`Operation`]. Lookup is
//! case-insensitive and accepts both the command name (`int_divide`) and
//! the display name (`IntegerDivide`), so history written by either form
//! can be read back.

use std::fmt;

/// Failure raised by the registry or by an operation's domain check.
///
/// Unknown names and arithmetic domain violations share one error kind;
/// the variant and message tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("{0}")]
    DivisionByZero(&'static str),

    #[error("{0}")]
    InvalidDomain(&'static str),
}

pub type Result<T> = core::result::Result<T, OperationError>;

/// A binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
    Modulus,
    IntegerDivide,
    Percentage,
    AbsoluteDifference,
}

impl Operation {
    /// Every operation, in the order `help` lists them.
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Root,
        Self::Modulus,
        Self::IntegerDivide,
        Self::Percentage,
        Self::AbsoluteDifference,
    ];

    /// Resolve an operation by name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| {
                op.command_name() == wanted || op.display_name().eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| OperationError::UnknownOperation(name.to_string()))
    }

    /// The REPL command that runs this operation.
    pub fn command_name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Root => "root",
            Self::Modulus => "modulus",
            Self::IntegerDivide => "int_divide",
            Self::Percentage => "percent",
            Self::AbsoluteDifference => "abs_diff",
        }
    }

    /// Human-facing name, used in the calculation log.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Power => "Power",
            Self::Root => "Root",
            Self::Modulus => "Modulus",
            Self::IntegerDivide => "IntegerDivide",
            Self::Percentage => "Percentage",
            Self::AbsoluteDifference => "AbsoluteDifference",
        }
    }

    /// Apply the operation to `a` and `b`.
    ///
    /// Fails only on a domain violation; never has side effects.
    pub fn calculate(self, a: f64, b: f64) -> Result<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(OperationError::DivisionByZero("cannot divide by zero"));
                }
                Ok(a / b)
            }
            Self::Power => Ok(a.powf(b)),
            Self::Root => root(a, b),
            Self::Modulus => {
                if b == 0.0 {
                    return Err(OperationError::DivisionByZero(
                        "cannot perform modulus with zero",
                    ));
                }
                Ok(floored_rem(a, b))
            }
            Self::IntegerDivide => {
                if b == 0.0 {
                    return Err(OperationError::DivisionByZero(
                        "cannot perform integer division by zero",
                    ));
                }
                Ok((a / b).floor())
            }
            Self::Percentage => {
                if b == 0.0 {
                    return Err(OperationError::DivisionByZero(
                        "cannot calculate a percentage of zero",
                    ));
                }
                Ok((a / b) * 100.0)
            }
            Self::AbsoluteDifference => Ok((a - b).abs()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command_name())
    }
}

/// The `b`-th root of `a`, restricted to real results.
fn root(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(OperationError::InvalidDomain("the zeroth root is undefined"));
    }
    if a >= 0.0 {
        return Ok(a.powf(b.recip()));
    }
    if b.fract() != 0.0 {
        return Err(OperationError::InvalidDomain(
            "cannot take a fractional root of a negative number",
        ));
    }
    if b % 2.0 == 0.0 {
        return Err(OperationError::InvalidDomain(
            "cannot take an even root of a negative number",
        ));
    }
    // Odd root of a negative number is real: -(|a|^(1/b)).
    Ok(-(-a).powf(b.recip()))
}

/// Remainder that takes the sign of the divisor.
fn floored_rem(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}
