//! Widget configuration.
//!
//! Every recognized option lives on an explicit [`Config`] structure with a
//! default, validated once at construction; there is no loosely-typed option
//! bag. Localized text lives on [`Strings`].

use std::time::Duration;
use thiserror::Error;

/// Localized strings surfaced by the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    /// Placeholder shown in the empty search input.
    pub placeholder: String,
    /// Message shown when the selection list is empty.
    pub none_selected: String,
    /// Reason surfaced while the selector is disabled at the selection cap.
    pub limit_reached: String,
    /// Label shown next to the spinner while a lookup is pending.
    pub searching: String,
    /// Message shown when a filter or lookup yields no candidates.
    pub no_matches: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            placeholder: "Search...".to_string(),
            none_selected: "Nothing selected.".to_string(),
            limit_reached: "Selection limit reached.".to_string(),
            searching: "Searching...".to_string(),
            no_matches: "No matches.".to_string(),
        }
    }
}

/// Errors produced by [`Config::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_selected` was set to zero; use `None` for "no cap".
    #[error("max_selected must be at least 1 when set")]
    ZeroSelectionCap,
    /// The search debounce was zero; every keystroke would fire a lookup.
    #[error("search_debounce must be non-zero")]
    ZeroDebounce,
    /// A dataset field name was empty.
    #[error("dataset field names must not be empty")]
    EmptyDataField,
    /// The same dataset field was named twice.
    #[error("duplicate dataset field `{0}`")]
    DuplicateDataField(String),
}

/// All recognized widget options.
///
/// # Examples
///
/// ```
/// use bubbletea_multilist::Config;
/// use std::time::Duration;
///
/// let config = Config::default()
///     .with_max_selected(3)
///     .with_data_field("group")
///     .with_search_debounce(Duration::from_millis(300));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Cap on the selection size; `None` means unlimited.
    pub max_selected: Option<usize>,
    /// Dataset field names carried from option entries into choices.
    pub data: Vec<String>,
    /// Quiet period before a search fires the remote lookup.
    pub search_debounce: Duration,
    /// Render width in terminal columns.
    pub width: usize,
    /// Localized text.
    pub strings: Strings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_selected: None,
            data: Vec::new(),
            search_debounce: Duration::from_millis(250),
            width: 40,
            strings: Strings::default(),
        }
    }
}

impl Config {
    /// Sets the selection cap, builder style.
    pub fn with_max_selected(mut self, max: usize) -> Self {
        self.max_selected = Some(max);
        self
    }

    /// Adds a dataset field name to carry through, builder style.
    pub fn with_data_field(mut self, field: impl Into<String>) -> Self {
        self.data.push(field.into());
        self
    }

    /// Sets the search quiet period, builder style.
    pub fn with_search_debounce(mut self, debounce: Duration) -> Self {
        self.search_debounce = debounce;
        self
    }

    /// Sets the render width, builder style.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the localized strings, builder style.
    pub fn with_strings(mut self, strings: Strings) -> Self {
        self.strings = strings;
        self
    }

    /// Checks the configuration for internally inconsistent values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_selected == Some(0) {
            return Err(ConfigError::ZeroSelectionCap);
        }
        if self.search_debounce.is_zero() {
            return Err(ConfigError::ZeroDebounce);
        }
        for (i, field) in self.data.iter().enumerate() {
            if field.is_empty() {
                return Err(ConfigError::EmptyDataField);
            }
            if self.data[..i].contains(field) {
                return Err(ConfigError::DuplicateDataField(field.clone()));
            }
        }
        Ok(())
    }
}
