//! Percentages: `20%` and `20% of 50`.

use super::error::EvalError;
use super::evaluation::Quantity;
use super::operand::{currency_unit, leading_number, parse_amount};

/// Evaluate a percentage line.
///
/// With `of`, returns that share of the amount after it, keeping the
/// amount's currency symbol. Without it, returns the fraction with unit `%`.
pub fn percentage(tokens: &[String]) -> Result<Quantity, EvalError> {
    let percent = tokens
        .first()
        .and_then(|t| leading_number(t))
        .ok_or(EvalError::InvalidNumber)?;

    match tokens.iter().position(|t| t == "of") {
        Some(index) => {
            let base = tokens.get(index + 1).ok_or(EvalError::InvalidPercentage)?;
            let total = parse_amount(base).ok_or(EvalError::InvalidNumber)?;
            Ok(Quantity::new(percent / 100.0 * total, currency_unit(base)))
        }
        None => Ok(Quantity::new(percent / 100.0, "%")),
    }
}
