//! Plain-text and JSON rendering of evaluated lines.

use anyhow::Result;

use crate::calculator::format_display;
use crate::config::Config;
use crate::items::LineItem;
use crate::sheet::Sheet;

/// Render lines as two columns: the input, then its result.
///
/// Inputs are padded to the widest line so results line up on the right.
/// Blank lines keep their place with no result.
pub fn overlay(items: &[LineItem], config: &Config) -> String {
    let width = items
        .iter()
        .map(|item| item.input.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for item in items {
        let result = result_column(item, config);
        if result.is_empty() {
            out.push_str(item.input.trim_end());
        } else {
            let pad = width - item.input.chars().count();
            out.push_str(&item.input);
            out.push_str(&" ".repeat(pad));
            out.push_str("   ");
            out.push_str(&result);
        }
        out.push('\n');
    }
    out
}

/// The right-hand column for a single line.
pub fn result_column(item: &LineItem, config: &Config) -> String {
    match item.display_result.as_deref() {
        None => String::new(),
        Some(_) if item.is_error && !config.show_errors => String::new(),
        Some(message) if item.is_error => message.to_string(),
        Some(result) => format!("{}{}", config.result_prefix, result),
    }
}

/// The sum of every successful line, e.g. `Total = 42.00`.
pub fn total_line(sheet: &Sheet, config: &Config) -> String {
    format!(
        "Total {}{}",
        config.result_prefix,
        format_display(sheet.total(), "", config.number_format())
    )
}

/// Render lines as a pretty-printed JSON array.
pub fn json(items: &[LineItem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}
