//! Single-argument math functions: `sin`, `cos`, `tan`, `log`, `exp`.

use super::error::EvalError;
use super::evaluation::Quantity;
use super::operand::leading_number;

/// Evaluate `sin|cos|tan <number>`. Angles are in radians.
///
/// The argument is parsed as a plain number; a currency prefix makes it
/// invalid.
pub fn trigonometric(tokens: &[String]) -> Result<Quantity, EvalError> {
    let x = argument(tokens).ok_or(EvalError::InvalidTrigValue)?;
    let value = match tokens[0].as_str() {
        "sin" => x.sin(),
        "cos" => x.cos(),
        "tan" => x.tan(),
        _ => return Err(EvalError::InvalidExpression),
    };
    Ok(Quantity::dimensionless(value))
}

/// Evaluate `log|exp <number>`. `log` is the natural logarithm.
pub fn log_exp(tokens: &[String]) -> Result<Quantity, EvalError> {
    let x = argument(tokens).ok_or(EvalError::InvalidLogExpValue)?;
    let value = match tokens[0].as_str() {
        "log" => x.ln(),
        "exp" => x.exp(),
        _ => return Err(EvalError::InvalidExpression),
    };
    Ok(Quantity::dimensionless(value))
}

fn argument(tokens: &[String]) -> Option<f64> {
    tokens.get(1).and_then(|t| leading_number(t))
}
