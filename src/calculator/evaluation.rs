//! Line evaluation.
//!
//! Tokenizes a line, picks a strategy with [`classify`] and runs it. Every
//! strategy failure comes back as a [`CalcResult::Error`]; nothing escapes
//! to the caller.

use tracing::{debug, trace};

use super::chain::calculate;
use super::conversion::convert;
use super::detection::{Strategy, classify, is_reserved_word};
use super::error::EvalError;
use super::functions::{log_exp, trigonometric};
use super::operand::{currency_unit, leading_number, parse_amount};
use super::percentage::percentage;
use super::tokenize::{is_blank, tokenize};
use super::variables::VariableStore;

/// A number with an optional unit.
///
/// `unit` is empty for dimensionless values. It may hold a currency symbol
/// (`$`), an upper-cased unit name (`FOOT`) or `%`.
#[derive(Clone, Debug, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, "")
    }
}

/// Result of evaluating a calculator line.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// The line evaluated to a value.
    Success {
        value: f64,
        /// Empty when dimensionless.
        unit: String,
    },
    /// The line could not be evaluated.
    Error {
        /// Human-readable reason, suitable for display as is.
        message: String,
    },
}

impl CalcResult {
    /// The value, for successful results.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    /// The unit, for successful results.
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::Success { unit, .. } => Some(unit),
            Self::Error { .. } => None,
        }
    }

    /// The failure reason, for errors.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message } => Some(message),
        }
    }
}

impl From<Result<Quantity, EvalError>> for CalcResult {
    fn from(result: Result<Quantity, EvalError>) -> Self {
        match result {
            Ok(Quantity { value, unit }) => Self::Success { value, unit },
            Err(err) => Self::Error {
                message: err.to_string(),
            },
        }
    }
}

/// Evaluate one line of input.
///
/// Returns `None` for blank input. Assignments write into `variables`;
/// every other line only reads from it.
pub fn evaluate(input: &str, variables: &mut VariableStore) -> Option<CalcResult> {
    if is_blank(input) {
        return None;
    }
    Some(evaluate_line(input, variables).into())
}

fn evaluate_line(input: &str, variables: &mut VariableStore) -> Result<Quantity, EvalError> {
    let line = input.trim();
    let tokens = tokenize(line);

    let strategy = classify(line, &tokens).ok_or(EvalError::InvalidExpression)?;
    trace!(?strategy, %line, "dispatching line");

    match strategy {
        Strategy::Assignment => assign(&tokens, variables),
        Strategy::Trigonometric => trigonometric(&tokens),
        Strategy::LogExp => log_exp(&tokens),
        Strategy::Conversion => convert(&tokens, variables),
        Strategy::Chain => calculate(&tokens, variables),
        Strategy::Percentage => percentage(&tokens),
        Strategy::BareValue => bare_value(&tokens[0], variables),
    }
}

/// `name = <expression>`: evaluate the right-hand side and bind it.
///
/// Chained assignments (`a = b = 5`) are peeled off in a loop, the final
/// right-hand side is evaluated once and every name gets its value. A
/// failing right-hand side is reported as an invalid assignment; its own
/// reason is not passed on.
fn assign(tokens: &[String], variables: &mut VariableStore) -> Result<Quantity, EvalError> {
    let mut names = Vec::new();
    let mut rest = tokens;
    while rest.len() >= 3 && rest[1] == "=" {
        let name = rest[0].as_str();
        if is_reserved_word(name) || leading_number(name).is_some() {
            return Err(if names.is_empty() {
                EvalError::InvalidVariableName
            } else {
                EvalError::InvalidAssignment
            });
        }
        names.push(name);
        rest = &rest[2..];
    }

    let expression = rest.join(" ");
    let quantity = evaluate_line(&expression, variables).map_err(|err| {
        debug!(?names, %err, "assignment failed");
        EvalError::InvalidAssignment
    })?;

    for name in names {
        debug!(%name, value = quantity.value, "assigned variable");
        variables.set(name, quantity.value);
    }
    Ok(quantity)
}

/// A single token: a known variable, else a number with optional currency.
fn bare_value(token: &str, variables: &VariableStore) -> Result<Quantity, EvalError> {
    if let Some(value) = variables.get(token) {
        return Ok(Quantity::dimensionless(value));
    }
    let value = parse_amount(token).ok_or(EvalError::InvalidNumber)?;
    Ok(Quantity::new(value, currency_unit(token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn eval(input: &str) -> Option<CalcResult> {
        evaluate(input, &mut VariableStore::new())
    }

    fn message(result: Option<CalcResult>) -> String {
        result
            .and_then(|r| r.error().map(str::to_string))
            .unwrap_or_default()
    }

    #[test]
    fn test_blank_input_is_absent() {
        assert_eq!(eval(""), None);
        assert_eq!(eval("   \t  "), None);
    }

    #[test]
    fn test_assignment_round_trip() {
        let mut vars = VariableStore::new();
        let result = evaluate("x = 5", &mut vars).unwrap();
        assert_eq!(result, CalcResult::Success { value: 5.0, unit: String::new() });
        assert_eq!(vars.get("x"), Some(5.0));

        let result = evaluate("x", &mut vars).unwrap();
        assert_eq!(result, CalcResult::Success { value: 5.0, unit: String::new() });
    }

    #[test]
    fn test_assignment_of_expression() {
        let mut vars = VariableStore::new();
        let result = evaluate("Sum = $10 + $5", &mut vars).unwrap();
        assert_eq!(result.value(), Some(15.0));
        assert_eq!(result.unit(), Some("$"));
        assert_eq!(vars.get("sum"), Some(15.0));

        evaluate("y = sum times 2", &mut vars);
        assert_eq!(vars.get("y"), Some(30.0));
    }

    #[test]
    fn test_chained_assignment() {
        let mut vars = VariableStore::new();
        let result = evaluate("a = b = 5 plus 1", &mut vars).unwrap();
        assert_eq!(result.value(), Some(6.0));
        assert_eq!(vars.get("a"), Some(6.0));
        assert_eq!(vars.get("b"), Some(6.0));

        assert_eq!(
            message(evaluate("c = sin = 1", &mut vars)),
            "Invalid value for variable assignment"
        );
        assert_eq!(vars.get("c"), None);
    }

    #[test]
    fn test_long_assignment_chain() {
        let mut vars = VariableStore::new();
        let line = format!("{}1", "a = ".repeat(60_000));
        let result = evaluate(&line, &mut vars).unwrap();
        assert_eq!(result.value(), Some(1.0));
        assert_eq!(vars.get("a"), Some(1.0));
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn test_assignment_overwrites() {
        let mut vars = VariableStore::new();
        evaluate("x = 1", &mut vars);
        evaluate("x = 2", &mut vars);
        assert_eq!(vars.get("x"), Some(2.0));
    }

    #[test]
    fn test_failed_assignment_leaves_store_alone() {
        let mut vars = VariableStore::new();
        let result = evaluate("x = 10 / 0", &mut vars);
        assert_eq!(message(result), "Invalid value for variable assignment");
        assert!(vars.is_empty());
    }

    #[test]
    fn test_reserved_variable_names() {
        let mut vars = VariableStore::new();
        assert_eq!(message(evaluate("sin = 3", &mut vars)), "Invalid variable name");
        assert_eq!(message(evaluate("5 = 3", &mut vars)), "Invalid variable name");
        assert!(vars.is_empty());
    }

    #[test]
    fn test_chain_no_precedence() {
        let result = eval("2 + 3 times 4").unwrap();
        assert_eq!(result.value(), Some(20.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert!(message(eval("10 / 0")).contains("Division by zero"));
    }

    #[test]
    fn test_currency_mixing_guard() {
        assert!(message(eval("$10 + €5")).contains("Cannot mix different currencies"));
    }

    #[test]
    fn test_conversion() {
        let result = eval("5 meter to foot").unwrap();
        assert!(approx_eq(result.value().unwrap(), 5.0 * 3.28084));
        assert_eq!(result.unit(), Some("FOOT"));
    }

    #[test]
    fn test_conversion_connector_is_case_sensitive() {
        assert_eq!(message(eval("5 Meter TO Foot")), "Invalid expression");

        let result = eval("5 Meter to Foot").unwrap();
        assert!(approx_eq(result.value().unwrap(), 5.0 * 3.28084));
        assert_eq!(result.unit(), Some("FOOT"));
    }

    #[test]
    fn test_unsupported_conversion() {
        assert!(message(eval("5 meter to usd")).contains("Unsupported conversion"));
    }

    #[test]
    fn test_substring_dispatch_false_positive() {
        let mut vars = VariableStore::new();
        vars.set("total", 3.0);
        assert_eq!(
            message(evaluate("total + 5", &mut vars)),
            "Invalid conversion format"
        );
    }

    #[test]
    fn test_capitalized_variable_in_chain() {
        let mut vars = VariableStore::new();
        vars.set("total", 3.0);
        let result = evaluate("Total + 5", &mut vars).unwrap();
        assert_eq!(result.value(), Some(8.0));
    }

    #[test]
    fn test_percentage_of() {
        let result = eval("20% of 50").unwrap();
        assert!(approx_eq(result.value().unwrap(), 10.0));
    }

    #[test]
    fn test_functions() {
        assert_eq!(eval("sin 0").unwrap().value(), Some(0.0));
        assert_eq!(eval("exp 0").unwrap().value(), Some(1.0));
        assert_eq!(
            message(eval("tan x")),
            "Invalid value for trigonometric function"
        );
        assert_eq!(
            message(eval("log")),
            "Invalid value for logarithmic/exponential function"
        );
    }

    #[test]
    fn test_bare_values() {
        assert_eq!(
            eval("42").unwrap(),
            CalcResult::Success { value: 42.0, unit: String::new() }
        );
        assert_eq!(
            eval("€3.5").unwrap(),
            CalcResult::Success { value: 3.5, unit: "€".to_string() }
        );
        assert_eq!(message(eval("apples")), "Invalid number");
    }

    #[test]
    fn test_invalid_expression() {
        assert_eq!(message(eval("hello world")), "Invalid expression");
    }

    #[test]
    fn test_idempotent_non_assignment() {
        let mut vars = VariableStore::new();
        vars.set("rate", 4.0);
        let before = vars.clone();
        for line in ["rate times 3", "5 meter to foot", "20% of rate", "rate", "10 / 0"] {
            let first = evaluate(line, &mut vars);
            let second = evaluate(line, &mut vars);
            assert_eq!(first, second, "{line}");
        }
        assert_eq!(vars, before);
    }
}
