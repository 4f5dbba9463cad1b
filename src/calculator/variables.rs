//! Session-scoped variable storage.

use std::collections::BTreeMap;

/// Named numeric values shared by every line of a document.
///
/// Owned by the document and handed to each evaluation by mutable reference.
/// Assignment overwrites; nothing is ever removed short of [`clear`].
///
/// [`clear`]: VariableStore::clear
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableStore {
    values: BTreeMap<String, f64>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable by its lower-case name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Drop every binding. Used when a document is reloaded.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
