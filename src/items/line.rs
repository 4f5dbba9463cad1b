//! Line item representing one evaluated line of a sheet.

use serde::Serialize;

use crate::calculator::{CalcResult, NumberFormat, format_clipboard, format_display};

/// One line of a sheet together with its rendered result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineItem {
    /// Zero-based line number.
    pub index: usize,
    /// The line as typed.
    pub input: String,
    /// Numeric value, for successful lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Unit of the value, empty when dimensionless.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// The result formatted for display, or the error reason.
    /// None for blank lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_result: Option<String>,
    /// The result formatted for clipboard (raw number).
    #[serde(skip)]
    pub clipboard_result: Option<String>,
    /// Whether this is an error result.
    pub is_error: bool,
}

impl LineItem {
    /// Create a line item from an evaluation result.
    pub fn from_calc_result(
        index: usize,
        input: &str,
        result: Option<CalcResult>,
        format: NumberFormat,
    ) -> Self {
        let mut item = Self {
            index,
            input: input.to_string(),
            value: None,
            unit: None,
            display_result: None,
            clipboard_result: None,
            is_error: false,
        };

        match result {
            Some(CalcResult::Success { value, unit }) => {
                item.display_result = Some(format_display(value, &unit, format));
                item.clipboard_result = Some(format_clipboard(value));
                item.value = Some(value);
                item.unit = Some(unit);
            }
            Some(CalcResult::Error { message }) => {
                item.display_result = Some(message);
                item.is_error = true;
            }
            None => {}
        }

        item
    }

    /// Check if this line is blank.
    pub fn is_blank(&self) -> bool {
        self.display_result.is_none()
    }

    /// Get the text to copy to clipboard.
    /// Returns the clipboard result for successful lines,
    /// or the display result for errors (so user can still copy the error message).
    pub fn text_for_clipboard(&self) -> Option<&str> {
        self.clipboard_result
            .as_deref()
            .or(self.display_result.as_deref())
    }
}
