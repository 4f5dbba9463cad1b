//! A multi-line calculator document.
//!
//! Every text change re-evaluates the whole document from the top. The
//! variable store lives as long as the sheet, so a binding made by an
//! earlier edit stays visible until the sheet is reloaded.

use tracing::debug;

use crate::calculator::{NumberFormat, VariableStore, evaluate};
use crate::items::LineItem;

#[derive(Debug, Default)]
pub struct Sheet {
    variables: VariableStore,
    items: Vec<LineItem>,
    format: NumberFormat,
}

impl Sheet {
    pub fn new(format: NumberFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Replace the document text and re-evaluate every line.
    pub fn set_text(&mut self, text: &str) -> &[LineItem] {
        self.items = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .enumerate()
            .map(|(index, line)| {
                let result = evaluate(line, &mut self.variables);
                LineItem::from_calc_result(index, line, result, self.format)
            })
            .collect();

        debug!(
            lines = self.items.len(),
            variables = self.variables.len(),
            "re-evaluated sheet"
        );
        &self.items
    }

    /// Evaluate one more line at the end of the document.
    pub fn push_line(&mut self, line: &str) -> &LineItem {
        let index = self.items.len();
        let result = evaluate(line, &mut self.variables);
        self.items
            .push(LineItem::from_calc_result(index, line, result, self.format));
        &self.items[index]
    }

    /// Forget all variables, then evaluate `text` from scratch.
    pub fn reload(&mut self, text: &str) -> &[LineItem] {
        self.variables.clear();
        self.set_text(text)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Sum of all successful line values.
    pub fn total(&self) -> f64 {
        self.items.iter().filter_map(|item| item.value).sum()
    }

    /// The last line that produced a value.
    pub fn last_success(&self) -> Option<&LineItem> {
        self.items.iter().rev().find(|item| item.value.is_some())
    }
}
