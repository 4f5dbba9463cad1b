//! Left-to-right arithmetic chains: `value (operator value)*`.
//!
//! There is no operator precedence. Each operator is applied to the running
//! total as soon as its right operand is read, so `2 + 3 times 4` is `20`.

use super::detection::is_operator;
use super::error::EvalError;
use super::evaluation::Quantity;
use super::operand::{currency_unit, resolve};
use super::variables::VariableStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" | "plus" => Some(Self::Add),
            "-" | "minus" => Some(Self::Subtract),
            "*" | "times" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(EvalError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

/// Tracks the single currency a chain may use.
#[derive(Default)]
struct CurrencyGuard {
    unit: String,
}

impl CurrencyGuard {
    /// Bind the first currency seen; reject a different one later.
    fn check(&mut self, token: &str) -> Result<(), EvalError> {
        let symbol = currency_unit(token);
        if symbol.is_empty() {
            return Ok(());
        }
        if self.unit.is_empty() {
            self.unit = symbol;
            Ok(())
        } else if self.unit == symbol {
            Ok(())
        } else {
            Err(EvalError::MixedCurrencies)
        }
    }
}

/// Evaluate an arithmetic chain.
///
/// Operands are numbers (optionally currency-prefixed) or variable names.
/// An operand that is neither fails the line instead of producing `NaN`.
/// Consecutive operators keep the last one; a trailing operator is ignored.
/// The result carries the chain's currency symbol, if any.
pub fn calculate(tokens: &[String], variables: &VariableStore) -> Result<Quantity, EvalError> {
    let (first, rest) = tokens.split_first().ok_or(EvalError::InvalidExpression)?;

    let mut guard = CurrencyGuard::default();
    guard.check(first)?;
    let mut total = operand(first, variables)?;
    let mut pending: Option<Operator> = None;

    for token in rest {
        if let Some(op) = Operator::from_token(token) {
            pending = Some(op);
            continue;
        }

        guard.check(token)?;
        let value = operand(token, variables)?;
        let op = pending
            .take()
            .ok_or_else(|| EvalError::MissingOperator(token.clone()))?;
        total = op.apply(total, value)?;
    }

    Ok(Quantity::new(total, guard.unit))
}

fn operand(token: &str, variables: &VariableStore) -> Result<f64, EvalError> {
    if is_operator(token) {
        return Err(EvalError::InvalidExpression);
    }
    resolve(token, variables).ok_or_else(|| EvalError::UnknownValue(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::tokenize::tokenize;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn run(input: &str) -> Result<Quantity, EvalError> {
        calculate(&tokenize(input), &VariableStore::new())
    }

    #[test]
    fn test_no_precedence() {
        assert_eq!(run("2 + 3 times 4").unwrap().value, 20.0);
        assert_eq!(run("10 - 4 / 2").unwrap().value, 3.0);
    }

    #[test]
    fn test_word_aliases() {
        assert_eq!(run("2 plus 3").unwrap().value, 5.0);
        assert_eq!(run("9 minus 4").unwrap().value, 5.0);
        assert_eq!(run("6 times 7").unwrap().value, 42.0);
    }

    #[test]
    fn test_division() {
        assert!(approx_eq(run("1 / 4").unwrap().value, 0.25));
        assert_eq!(run("10 / 0"), Err(EvalError::DivisionByZero));
        assert_eq!(run("10 / 0.0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_zero_operand_is_a_number() {
        assert_eq!(run("0 + 5").unwrap().value, 5.0);
        assert_eq!(run("5 * 0").unwrap().value, 0.0);
    }

    #[test]
    fn test_currency_binding() {
        let result = run("$10 + $5").unwrap();
        assert_eq!(result.value, 15.0);
        assert_eq!(result.unit, "$");

        let result = run("10 + £5").unwrap();
        assert_eq!(result.unit, "£");

        assert_eq!(run("$10 + €5"), Err(EvalError::MixedCurrencies));
        assert_eq!(run("5 + €5 - $1"), Err(EvalError::MixedCurrencies));
    }

    #[test]
    fn test_variables() {
        let mut vars = VariableStore::new();
        vars.set("price", 12.5);
        vars.set("qty", 4.0);
        let result = calculate(&tokenize("price times qty"), &vars).unwrap();
        assert_eq!(result.value, 50.0);
        assert_eq!(result.unit, "");
    }

    #[test]
    fn test_unknown_operand_fails_fast() {
        assert_eq!(
            run("2 + apples"),
            Err(EvalError::UnknownValue("apples".to_string()))
        );
        assert_eq!(
            run("apples + 2"),
            Err(EvalError::UnknownValue("apples".to_string()))
        );
    }

    #[test]
    fn test_operator_edge_cases() {
        assert_eq!(run("2 +").unwrap().value, 2.0);
        assert_eq!(run("2 + * 3").unwrap().value, 6.0);
        assert_eq!(run("+ 2"), Err(EvalError::InvalidExpression));
        assert_eq!(run("2 3 + 1"), Err(EvalError::MissingOperator("3".to_string())));
    }
}
