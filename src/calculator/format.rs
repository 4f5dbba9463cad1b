//! Number formatting for results shown next to a line.

/// How a result value is rendered for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    /// Fixed number of decimal places.
    pub precision: usize,
    /// Group the integer part with commas.
    pub thousands_separator: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            precision: 2,
            thousands_separator: true,
        }
    }
}

/// Format a value (and unit) for display, e.g. `1,234.50 $`.
pub fn format_display(value: f64, unit: &str, format: NumberFormat) -> String {
    let number = format_number(value, format);
    if unit.is_empty() {
        number
    } else {
        format!("{} {}", number, unit)
    }
}

/// Format a number with fixed decimals and optional separators.
fn format_number(value: f64, format: NumberFormat) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    let fixed = format!("{:.*}", format.precision, value);
    if !format.thousands_separator {
        return fixed;
    }

    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, dec_part) = match digits.find('.') {
        Some(dot) => digits.split_at(dot),
        None => (digits, ""),
    };

    format!("{}{}{}", sign, group_thousands(int_part), dec_part)
}

/// Insert a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a number for clipboard (raw number, no separators).
pub fn format_clipboard(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.10}", value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
