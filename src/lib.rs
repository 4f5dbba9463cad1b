//! Notepad-style line calculator.
//!
//! Every line of a document is evaluated on its own against a variable
//! store shared by the whole document.

pub mod calculator;
pub mod config;
pub mod docs;
pub mod items;
pub mod render;
pub mod sheet;
pub mod watch;
