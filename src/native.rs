//! The backing control boundary.
//!
//! [`NativeSelect`] stands in for the native multi-select form control the
//! widget enhances: an ordered sequence of option entries, each with a value,
//! a label, a selected flag, and dataset fields. The widget reads it once at
//! initialization (and on reset) and writes the current selection back with
//! replace-all semantics on every change, so the control remains the durable
//! state.

use crate::choice::Choice;
use std::collections::BTreeMap;

/// One option entry of the backing control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    /// The option value; becomes the choice id.
    pub value: String,
    /// The option label; becomes the choice name.
    pub text: String,
    /// Whether the option is currently selected.
    pub selected: bool,
    /// Dataset fields attached to the option.
    pub dataset: BTreeMap<String, String>,
}

impl OptionEntry {
    /// Creates an unselected entry, string-coercing the value.
    pub fn new(value: impl ToString, text: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            text: text.into(),
            selected: false,
            dataset: BTreeMap::new(),
        }
    }

    /// Sets the selected flag, builder style.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Attaches one dataset field, builder style.
    pub fn with_dataset(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.insert(key.into(), value.into());
        self
    }

    /// Converts the entry to a [`Choice`], carrying only the dataset fields
    /// named in `data_fields`.
    fn to_choice(&self, data_fields: &[String]) -> Choice {
        let mut choice = Choice::new(&self.value, &self.text);
        for key in data_fields {
            if let Some(value) = self.dataset.get(key) {
                choice.data.insert(key.clone(), value.clone());
            }
        }
        choice
    }
}

/// The native multi-select surrogate: an ordered option sequence.
#[derive(Debug, Clone, Default)]
pub struct NativeSelect {
    entries: Vec<OptionEntry>,
}

impl NativeSelect {
    /// Creates an empty control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a control from an option sequence in document order.
    pub fn from_entries(entries: Vec<OptionEntry>) -> Self {
        Self { entries }
    }

    /// Appends one option entry.
    pub fn push(&mut self, entry: OptionEntry) {
        self.entries.push(entry);
    }

    /// All entries in document order.
    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    /// Number of option entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the control holds no options.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Choices for all currently-selected entries, in document order.
    pub fn selected_choices(&self, data_fields: &[String]) -> Vec<Choice> {
        self.entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.to_choice(data_fields))
            .collect()
    }

    /// Choices for all currently-unselected entries, in document order.
    pub fn unselected_choices(&self, data_fields: &[String]) -> Vec<Choice> {
        self.entries
            .iter()
            .filter(|e| !e.selected)
            .map(|e| e.to_choice(data_fields))
            .collect()
    }

    /// Commits an ordered selection back to the control with replace-all
    /// semantics: the whole option sequence is replaced by the given choices
    /// in order, every entry marked selected. Candidates that are not part of
    /// the selection live only in the suggestion pool from here on.
    pub fn commit(&mut self, selection: &[Choice]) {
        self.entries = selection
            .iter()
            .map(|choice| {
                let mut entry = OptionEntry::new(&choice.id, &choice.name).with_selected(true);
                entry.dataset = choice.data.clone();
                entry
            })
            .collect();
    }
}
