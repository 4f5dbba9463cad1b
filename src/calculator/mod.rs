//! Calculator module for evaluating notepad-style lines.
//!
//! This module provides functionality to:
//! - Detect which kind of expression a line holds
//! - Evaluate it against a shared variable store
//! - Format results and copy them to the clipboard

mod chain;
mod clipboard;
mod conversion;
mod detection;
mod error;
mod evaluation;
mod format;
mod functions;
mod operand;
mod percentage;
mod tokenize;
mod units;
mod variables;

pub use clipboard::copy_to_clipboard;
pub use error::EvalError;
pub use evaluation::{CalcResult, Quantity, evaluate};
pub use format::{NumberFormat, format_clipboard, format_display};
pub use variables::VariableStore;
