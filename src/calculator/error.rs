//! Failure reasons produced while evaluating a line.
//!
//! The `Display` text of every variant is the exact reason shown next to
//! the offending line, so collaborators can render it verbatim.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// No strategy matched the shape of the line.
    #[error("Invalid expression")]
    InvalidExpression,

    #[error("Invalid value for variable assignment")]
    InvalidAssignment,

    #[error("Invalid variable name")]
    InvalidVariableName,

    #[error("Invalid value for trigonometric function")]
    InvalidTrigValue,

    #[error("Invalid value for logarithmic/exponential function")]
    InvalidLogExpValue,

    #[error("Invalid conversion format")]
    InvalidConversionFormat,

    #[error("Unsupported conversion")]
    UnsupportedConversion,

    #[error("Cannot mix different currencies in calculation")]
    MixedCurrencies,

    #[error("Division by zero")]
    DivisionByZero,

    /// An arithmetic operand that is neither a number nor a known variable.
    #[error("Unknown value: {0}")]
    UnknownValue(String),

    #[error("Missing operator before {0}")]
    MissingOperator(String),

    #[error("Invalid percentage")]
    InvalidPercentage,

    #[error("Invalid number")]
    InvalidNumber,
}
