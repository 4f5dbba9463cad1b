//! Numeric operand parsing shared by the evaluation strategies.
//!
//! A numeric token may carry a currency symbol directly in front of it
//! (`$10`, `€5`). Numbers are read as the longest numeric prefix of the
//! token, so `20%` reads as `20` and `5meter` as `5`.

use lazy_static::lazy_static;
use regex::Regex;

use super::variables::VariableStore;

/// Currency symbols that can prefix a number.
pub const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£'];

lazy_static! {
    /// Matches the numeric prefix of a token.
    static ref LEADING_NUMBER: Regex = Regex::new(
        r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?"
    ).unwrap();
}

/// Split a leading currency symbol off a token.
///
/// Returns the symbol (if any) and the remainder.
pub fn strip_currency(token: &str) -> (Option<char>, &str) {
    match token.chars().next() {
        Some(c) if CURRENCY_SYMBOLS.contains(&c) => (Some(c), &token[c.len_utf8()..]),
        _ => (None, token),
    }
}

/// The currency symbol a token starts with, as a unit string.
pub fn currency_unit(token: &str) -> String {
    strip_currency(token)
        .0
        .map(String::from)
        .unwrap_or_default()
}

/// Map a currency symbol to its conversion-table code.
pub fn currency_code(symbol: char) -> Option<&'static str> {
    match symbol {
        '$' => Some("usd"),
        '€' => Some("eur"),
        '£' => Some("gbp"),
        _ => None,
    }
}

/// Parse the numeric prefix of `text`. No currency handling.
pub fn leading_number(text: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parse a token as a number after stripping a leading currency symbol.
pub fn parse_amount(token: &str) -> Option<f64> {
    leading_number(strip_currency(token).1)
}

/// Resolve an operand as a number, falling back to a variable lookup by the
/// exact token text.
pub fn resolve(token: &str, variables: &VariableStore) -> Option<f64> {
    parse_amount(token).or_else(|| variables.get(token))
}
