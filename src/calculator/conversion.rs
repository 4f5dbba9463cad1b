//! Unit and currency conversion: `<value> <unit> in|to <unit>`.

use super::detection::CONVERSION_CONNECTORS;
use super::error::EvalError;
use super::evaluation::Quantity;
use super::operand::{currency_code, resolve, strip_currency};
use super::units::conversion_factor;
use super::variables::VariableStore;

/// Convert the value on the left of the connector into the target unit.
///
/// The amount is read from the first token (a number, a currency-prefixed
/// number or a variable). The source unit is the token just before the
/// connector and the target unit the token just after it. A currency
/// symbol in either position stands for its currency code, so `$10 to eur`
/// and `10 usd to €` both work.
pub fn convert(tokens: &[String], variables: &VariableStore) -> Result<Quantity, EvalError> {
    let connector = tokens
        .iter()
        .position(|t| CONVERSION_CONNECTORS.contains(&t.as_str()))
        .ok_or(EvalError::InvalidConversionFormat)?;

    if connector == 0 {
        return Err(EvalError::InvalidConversionFormat);
    }
    let to_token = tokens
        .get(connector + 1)
        .ok_or(EvalError::InvalidConversionFormat)?;

    let from_unit = unit_name(&tokens[connector - 1]);
    let to_unit = unit_name(to_token);

    let amount = resolve(&tokens[0], variables).ok_or(EvalError::InvalidNumber)?;
    let factor = conversion_factor(&from_unit, &to_unit).ok_or(EvalError::UnsupportedConversion)?;

    Ok(Quantity::new(amount * factor, to_unit.to_uppercase()))
}

/// The unit named by a token.
///
/// Named units are taken as written. A token starting with a currency
/// symbol names that currency.
fn unit_name(token: &str) -> String {
    match strip_currency(token) {
        (Some(symbol), _) => currency_code(symbol).unwrap_or_default().to_string(),
        (None, name) => name.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::tokenize::tokenize;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn run(input: &str) -> Result<Quantity, EvalError> {
        convert(&tokenize(input), &VariableStore::new())
    }

    #[test]
    fn test_length_conversion() {
        let result = run("5 meter to foot").unwrap();
        assert!(approx_eq(result.value, 5.0 * 3.28084));
        assert_eq!(result.unit, "FOOT");
    }

    #[test]
    fn test_in_connector() {
        let result = run("2 gallon in liter").unwrap();
        assert!(approx_eq(result.value, 2.0 * 3.78541));
        assert_eq!(result.unit, "LITER");
    }

    #[test]
    fn test_currency_conversion() {
        let result = run("100 usd to eur").unwrap();
        assert!(approx_eq(result.value, 85.0));
        assert_eq!(result.unit, "EUR");

        let result = run("$10 to gbp").unwrap();
        assert!(approx_eq(result.value, 7.3));
        assert_eq!(result.unit, "GBP");

        let result = run("10 eur in $").unwrap();
        assert!(approx_eq(result.value, 11.8));
        assert_eq!(result.unit, "USD");
    }

    #[test]
    fn test_variable_amount() {
        let mut vars = VariableStore::new();
        vars.set("d", 2.0);
        let result = convert(&tokenize("d kilometer to meter"), &vars).unwrap();
        assert!(approx_eq(result.value, 2000.0));
    }

    #[test]
    fn test_unsupported_conversion() {
        assert_eq!(run("5 meter to usd"), Err(EvalError::UnsupportedConversion));
        assert_eq!(run("5 meter to meter"), Err(EvalError::UnsupportedConversion));
        assert_eq!(run("5 parsec to meter"), Err(EvalError::UnsupportedConversion));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(run("5 inch"), Err(EvalError::InvalidConversionFormat));
        assert_eq!(run("to foot"), Err(EvalError::InvalidConversionFormat));
        assert_eq!(run("5 meter to"), Err(EvalError::InvalidConversionFormat));
    }

    #[test]
    fn test_invalid_amount() {
        assert_eq!(run("some meter to foot"), Err(EvalError::InvalidNumber));
    }
}
