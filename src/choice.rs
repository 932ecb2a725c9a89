//! Core data model: choices and the ordered choice container.
//!
//! A [`Choice`] is one selectable entry: a string identity, a display name,
//! and an opaque bag of dataset fields carried through unchanged. [`Choices`]
//! is the ordered container both the selection list and the suggestion pool
//! are built on: a sequence of ids paired with a side map from id to value,
//! so reorders are index-based moves on the sequence rather than a rebuild
//! of the whole map.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use tracing::debug;

/// A single selectable entry.
///
/// Identity is the `id`; two choices with the same id are the same entry as
/// far as the widget is concerned. `data` carries extra per-item attributes
/// (the native control's dataset fields) through add/remove round trips
/// without interpretation.
///
/// # Examples
///
/// ```
/// use bubbletea_multilist::Choice;
///
/// let choice = Choice::new(7, "Bass").with_data("section", "rhythm");
/// assert_eq!(choice.id, "7"); // ids are string-coerced
/// assert_eq!(choice.data.get("section").map(String::as_str), Some("rhythm"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// String-coerced identity.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Opaque pass-through dataset fields.
    pub data: BTreeMap<String, String>,
}

impl Choice {
    /// Creates a choice, string-coercing the id.
    pub fn new(id: impl ToString, name: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            name: name.into(),
            data: BTreeMap::new(),
        }
    }

    /// Attaches one dataset field, builder style.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

impl Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An insertion-ordered set of choices keyed by id.
///
/// Maintains two views of the same collection: `order`, the id sequence that
/// defines display order, and `by_id`, the side map holding the values. The
/// two are kept consistent by construction; every membership mutation touches
/// both.
#[derive(Debug, Clone, Default)]
pub struct Choices {
    order: Vec<String>,
    by_id: HashMap<String, Choice>,
}

impl Choices {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Membership test by id.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Looks up a choice by id.
    pub fn get(&self, id: &str) -> Option<&Choice> {
        self.by_id.get(id)
    }

    /// Position of an id in display order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|o| o == id)
    }

    /// The id sequence in display order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Appends a choice at the end. Returns `false` (and leaves the container
    /// untouched) when the id is already present.
    pub fn push(&mut self, choice: Choice) -> bool {
        if self.by_id.contains_key(&choice.id) {
            return false;
        }
        self.order.push(choice.id.clone());
        self.by_id.insert(choice.id.clone(), choice);
        true
    }

    /// Inserts a choice, overwriting the value when the id is already present.
    /// An existing entry keeps its position; a new one is appended.
    pub fn insert_overwrite(&mut self, choice: Choice) {
        if !self.by_id.contains_key(&choice.id) {
            self.order.push(choice.id.clone());
        }
        self.by_id.insert(choice.id.clone(), choice);
    }

    /// Removes an entry by id, returning it when present.
    pub fn remove(&mut self, id: &str) -> Option<Choice> {
        let removed = self.by_id.remove(id)?;
        self.order.retain(|o| o != id);
        Some(removed)
    }

    /// Moves `source` to immediately before `target`. Equal ids or an absent
    /// id make this a no-op returning `false`.
    pub fn move_before(&mut self, source: &str, target: &str) -> bool {
        self.relocate(source, target, 0)
    }

    /// Moves `source` to immediately after `target`. Equal ids or an absent
    /// id make this a no-op returning `false`.
    pub fn move_after(&mut self, source: &str, target: &str) -> bool {
        self.relocate(source, target, 1)
    }

    fn relocate(&mut self, source: &str, target: &str, offset: usize) -> bool {
        if source == target {
            return false;
        }
        if !self.by_id.contains_key(source) || !self.by_id.contains_key(target) {
            debug!(source, target, "reorder ignored: unknown id");
            return false;
        }
        let Some(from) = self.position(source) else {
            return false;
        };
        let id = self.order.remove(from);
        let Some(at) = self.position(target) else {
            // Target vanished between the membership check and here; restore.
            self.order.insert(from, id);
            return false;
        };
        self.order.insert(at + offset, id);
        true
    }

    /// Iterates the choices in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Choice> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Ordered clones of all entries.
    pub fn to_vec(&self) -> Vec<Choice> {
        self.iter().cloned().collect()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.order.clear();
        self.by_id.clear();
    }
}

impl FromIterator<Choice> for Choices {
    fn from_iter<T: IntoIterator<Item = Choice>>(iter: T) -> Self {
        let mut choices = Choices::new();
        for choice in iter {
            choices.push(choice);
        }
        choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(ids: &[u32]) -> Choices {
        ids.iter()
            .map(|i| Choice::new(*i, format!("item {i}")))
            .collect()
    }

    fn order_of(choices: &Choices) -> Vec<&str> {
        choices.ids().iter().map(String::as_str).collect()
    }

    #[test]
    fn push_preserves_insertion_order() {
        let choices = numbered(&[3, 1, 2]);
        assert_eq!(order_of(&choices), ["3", "1", "2"]);
    }

    #[test]
    fn push_rejects_duplicate_ids() {
        let mut choices = numbered(&[1, 2]);
        assert!(!choices.push(Choice::new(1, "again")));
        assert_eq!(choices.len(), 2);
        assert_eq!(choices.get("1").map(|c| c.name.as_str()), Some("item 1"));
    }

    #[test]
    fn insert_overwrite_keeps_position() {
        let mut choices = numbered(&[1, 2, 3]);
        choices.insert_overwrite(Choice::new(2, "replaced"));
        assert_eq!(order_of(&choices), ["1", "2", "3"]);
        assert_eq!(choices.get("2").map(|c| c.name.as_str()), Some("replaced"));
    }

    #[test]
    fn remove_returns_the_entry() {
        let mut choices = numbered(&[1, 2, 3]);
        let removed = choices.remove("2");
        assert_eq!(removed.map(|c| c.id), Some("2".to_string()));
        assert_eq!(order_of(&choices), ["1", "3"]);
        assert!(choices.remove("2").is_none());
    }

    #[test]
    fn move_before_matches_fixture() {
        // [1,2,3,4], move 4 before 2 -> [1,4,2,3]
        let mut choices = numbered(&[1, 2, 3, 4]);
        assert!(choices.move_before("4", "2"));
        assert_eq!(order_of(&choices), ["1", "4", "2", "3"]);
    }

    #[test]
    fn move_after_matches_fixture() {
        // [1,4,2,3], move 4 after 2 -> [1,2,4,3]
        let mut choices = numbered(&[1, 4, 2, 3]);
        assert!(choices.move_after("4", "2"));
        assert_eq!(order_of(&choices), ["1", "2", "4", "3"]);
    }

    #[test]
    fn move_onto_self_is_a_noop() {
        let mut choices = numbered(&[1, 2, 3]);
        assert!(!choices.move_before("2", "2"));
        assert!(!choices.move_after("2", "2"));
        assert_eq!(order_of(&choices), ["1", "2", "3"]);
    }

    #[test]
    fn move_with_unknown_id_is_a_noop() {
        let mut choices = numbered(&[1, 2, 3]);
        assert!(!choices.move_before("9", "2"));
        assert!(!choices.move_after("1", "9"));
        assert_eq!(order_of(&choices), ["1", "2", "3"]);
    }

    #[test]
    fn move_preserves_other_relative_order() {
        let mut choices = numbered(&[1, 2, 3, 4, 5]);
        choices.move_after("1", "5");
        assert_eq!(order_of(&choices), ["2", "3", "4", "5", "1"]);
        choices.move_before("1", "2");
        assert_eq!(order_of(&choices), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn choice_id_is_string_coerced() {
        let choice = Choice::new(42, "answer");
        assert_eq!(choice.id, "42");
    }
}
