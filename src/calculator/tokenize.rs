//! Splitting an input line into tokens.

/// Tokenize a raw line: trim, lower-case, split on runs of whitespace.
///
/// Tokens are plain strings; their kind (operator, number, currency,
/// variable) is worked out wherever a strategy needs it.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Check if a line carries nothing to evaluate.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
