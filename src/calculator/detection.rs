//! Shape detection for calculator lines.
//!
//! Decides which evaluation strategy a tokenized line belongs to. The
//! checks run in a fixed order and the first match wins: a line such as
//! `x = 5 meter to foot` is an assignment before it is a conversion.

/// Trigonometric function names (arguments in radians).
pub const TRIG_FUNCTIONS: &[&str] = &["sin", "cos", "tan"];

/// Natural logarithm and exponential.
pub const LOG_EXP_FUNCTIONS: &[&str] = &["log", "exp"];

/// Operator keywords recognized by the arithmetic chain.
pub const OPERATOR_KEYWORDS: &[&str] = &["+", "-", "*", "/", "times", "plus", "minus"];

/// Words a conversion uses to join the source and target units.
pub const CONVERSION_CONNECTORS: &[&str] = &["in", "to"];

/// Words that may not be used as variable names.
const RESERVED_WORDS: &[&str] = &["=", "of", "%"];

/// The evaluation strategy selected for a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Assignment,
    Trigonometric,
    LogExp,
    Conversion,
    Chain,
    Percentage,
    BareValue,
}

/// Classify a line into a strategy.
///
/// `line` is the trimmed input as typed (not lower-cased) and `tokens` its
/// tokenization.
/// Returns `None` when nothing matches.
pub fn classify(line: &str, tokens: &[String]) -> Option<Strategy> {
    let first = tokens.first()?.as_str();

    if is_assignment(tokens) {
        Some(Strategy::Assignment)
    } else if TRIG_FUNCTIONS.contains(&first) {
        Some(Strategy::Trigonometric)
    } else if LOG_EXP_FUNCTIONS.contains(&first) {
        Some(Strategy::LogExp)
    } else if mentions_conversion(line) {
        Some(Strategy::Conversion)
    } else if has_operator(tokens) {
        Some(Strategy::Chain)
    } else if mentions_percentage(line) {
        Some(Strategy::Percentage)
    } else if tokens.len() == 1 {
        Some(Strategy::BareValue)
    } else {
        None
    }
}

/// At least three tokens with `=` in second position.
fn is_assignment(tokens: &[String]) -> bool {
    tokens.len() >= 3 && tokens[1] == "="
}

/// Check if the line hints at a unit conversion.
///
/// This is a substring test, so words that merely contain `in` or `to`
/// (`inch`, `total`) also match. The conversion strategy re-checks for a
/// real connector token.
pub fn mentions_conversion(line: &str) -> bool {
    CONVERSION_CONNECTORS.iter().any(|c| line.contains(c))
}

/// Check if the line carries a percent sign anywhere.
pub fn mentions_percentage(line: &str) -> bool {
    line.contains('%')
}

/// Check if any token is an operator keyword.
fn has_operator(tokens: &[String]) -> bool {
    tokens.iter().any(|t| is_operator(t))
}

pub fn is_operator(token: &str) -> bool {
    OPERATOR_KEYWORDS.contains(&token)
}

/// Check if `name` collides with a keyword that has meaning in a line.
pub fn is_reserved_word(name: &str) -> bool {
    TRIG_FUNCTIONS.contains(&name)
        || LOG_EXP_FUNCTIONS.contains(&name)
        || OPERATOR_KEYWORDS.contains(&name)
        || CONVERSION_CONNECTORS.contains(&name)
        || RESERVED_WORDS.contains(&name)
}
