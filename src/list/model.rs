//! Model for the selection list: the ordered set of chosen entries.

use super::delegate::{DefaultDelegate, ItemDelegate};
use super::drag::{DragEvent, DragMsg, DragState, DropSide};
use super::events::{ChangeListener, ListEvent, RemoveListener};
use super::keys::ListKeyMap;
use super::style::ListStyles;
use crate::choice::{Choice, Choices};
use crate::config::Strings;
use crate::native::NativeSelect;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use tracing::{debug, trace};

/// The ordered selection with add/remove/reorder, drag-driven reordering,
/// and an immutable snapshot for reset.
///
/// Mutations outside the allowed ones degrade to silent no-ops: adding a
/// duplicate or adding past the cap changes nothing, and a reorder naming an
/// unknown id is ignored. Every effective mutation notifies the registered
/// change listeners with the fully-updated ordered collection and queues a
/// typed [`ListEvent`] for the embedding widget.
pub struct Model {
    choices: Choices,
    snapshot: Choices,
    max_selected: Option<usize>,
    cursor: usize,
    pub(super) drag: DragState,
    delegate: Box<dyn ItemDelegate + Send + Sync>,
    keymap: ListKeyMap,
    styles: ListStyles,
    strings: Strings,
    width: usize,
    pending: Vec<ListEvent>,
    change_listeners: Vec<ChangeListener>,
    remove_listeners: Vec<RemoveListener>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an empty selection list with default settings: no cap, the
    /// default delegate and key bindings, 40 columns.
    pub fn new() -> Self {
        Self {
            choices: Choices::new(),
            snapshot: Choices::new(),
            max_selected: None,
            cursor: 0,
            drag: DragState::new(),
            delegate: Box::new(DefaultDelegate),
            keymap: ListKeyMap::default(),
            styles: ListStyles::default(),
            strings: Strings::default(),
            width: 40,
            pending: Vec::new(),
            change_listeners: Vec::new(),
            remove_listeners: Vec::new(),
        }
    }

    /// Sets the selection cap, builder style.
    pub fn with_max_selected(mut self, max: Option<usize>) -> Self {
        self.max_selected = max;
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

    /// Replaces the item delegate, builder style.
    pub fn with_delegate<D>(mut self, delegate: D) -> Self
    where
        D: ItemDelegate + Send + Sync + 'static,
    {
        self.delegate = Box::new(delegate);
        self
    }

    /// Replaces the key bindings, builder style.
    pub fn with_keymap(mut self, keymap: ListKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Registers a listener invoked after every mutation with the resulting
    /// ordered collection.
    pub fn on_change(&mut self, listener: ChangeListener) {
        self.change_listeners.push(listener);
    }

    /// Registers a listener invoked with each removed choice.
    pub fn on_remove(&mut self, listener: RemoveListener) {
        self.remove_listeners.push(listener);
    }

    /// Clears and repopulates from the control's currently-selected entries,
    /// in document order, and captures the snapshot [`Model::reset`] restores.
    pub fn load_from(&mut self, control: &NativeSelect, data_fields: &[String]) {
        self.choices.clear();
        for choice in control.selected_choices(data_fields) {
            self.choices.push(choice);
        }
        self.snapshot = self.choices.clone();
        self.cursor = 0;
        self.drag = DragState::new();
        self.notify_change();
    }

    /// Appends a choice. Silent no-op when the id is already present or the
    /// cap is reached; returns whether the choice was added.
    pub fn add(&mut self, choice: Choice) -> bool {
        if !self.can_accept(&choice) {
            debug!(id = %choice.id, "add ignored: duplicate or at cap");
            return false;
        }
        self.choices.push(choice.clone());
        self.emit(ListEvent::Added(choice));
        true
    }

    /// Removes a choice by id, returning it when present. Notifies removal
    /// listeners before the change notification.
    pub fn remove(&mut self, id: &str) -> Option<Choice> {
        let removed = self.choices.remove(id)?;
        self.cursor = self.cursor.min(self.choices.len().saturating_sub(1));
        self.emit(ListEvent::Removed(removed.clone()));
        Some(removed)
    }

    /// Moves `source` to immediately before `target`; all other entries keep
    /// their relative order. Silent no-op on equal or unknown ids.
    pub fn reorder_before(&mut self, source: &str, target: &str) -> bool {
        self.reorder(source, target, DropSide::Before)
    }

    /// Moves `source` to immediately after `target`; all other entries keep
    /// their relative order. Silent no-op on equal or unknown ids.
    pub fn reorder_after(&mut self, source: &str, target: &str) -> bool {
        self.reorder(source, target, DropSide::After)
    }

    fn reorder(&mut self, source: &str, target: &str, side: DropSide) -> bool {
        let Some(from) = self.choices.position(source) else {
            debug!(source, target, "reorder ignored: unknown id");
            return false;
        };
        let moved = match side {
            DropSide::Before => self.choices.move_before(source, target),
            DropSide::After => self.choices.move_after(source, target),
        };
        if !moved {
            return false;
        }
        let to = self.choices.position(source).unwrap_or(from);
        self.emit(ListEvent::Reordered {
            id: source.to_string(),
            from,
            to,
        });
        true
    }

    /// Restores the collection captured at the most recent
    /// [`Model::load_from`], discarding everything since. Triggers a change
    /// notification like any other mutation.
    pub fn reset(&mut self) {
        self.choices = self.snapshot.clone();
        self.cursor = self.cursor.min(self.choices.len().saturating_sub(1));
        self.drag = DragState::new();
        self.notify_change();
    }

    /// Number of selected entries.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Membership test by id.
    pub fn contains(&self, id: &str) -> bool {
        self.choices.contains(id)
    }

    /// True when the cap is set and reached.
    pub fn is_full(&self) -> bool {
        self.max_selected
            .map_or(false, |max| self.choices.len() >= max)
    }

    /// True when the choice could be added right now.
    pub fn can_accept(&self, choice: &Choice) -> bool {
        !self.is_full() && !self.choices.contains(&choice.id)
    }

    /// Iterates the selection in display order.
    pub fn items(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter()
    }

    /// Ordered clones of the selection.
    pub fn ordered(&self) -> Vec<Choice> {
        self.choices.to_vec()
    }

    /// The id sequence in display order.
    pub fn ids(&self) -> &[String] {
        self.choices.ids()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The render styles, for delegates.
    pub fn styles(&self) -> &ListStyles {
        &self.styles
    }

    /// The render width, for delegates.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The localized strings.
    pub(crate) fn strings(&self) -> &Strings {
        &self.strings
    }

    pub(crate) fn keymap(&self) -> &ListKeyMap {
        &self.keymap
    }

    pub(crate) fn delegate(&self) -> &(dyn ItemDelegate + Send + Sync) {
        self.delegate.as_ref()
    }

    /// Drains the typed events queued since the last call. The embedding
    /// widget uses this to react to mutations made through [`Model::update`].
    pub fn drain_events(&mut self) -> Vec<ListEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Feeds one drag input to the machine and applies a settled drop.
    pub fn apply_drag(&mut self, event: DragEvent) {
        self.drag.apply(event);
        if let Some((source, outcome)) = self.drag.take_settled() {
            match outcome {
                Some((target, DropSide::Before)) => {
                    self.reorder_before(&source, &target);
                }
                Some((target, DropSide::After)) => {
                    self.reorder_after(&source, &target);
                }
                None => trace!(%source, "drag ended without a target"),
            }
        }
    }

    /// Handles key and drag messages.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(DragMsg(event)) = msg.downcast_ref::<DragMsg>() {
            self.apply_drag(event.clone());
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.cursor_up.matches(key_msg) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if self.keymap.cursor_down.matches(key_msg) {
            if self.cursor + 1 < self.choices.len() {
                self.cursor += 1;
            }
        } else if self.keymap.go_to_start.matches(key_msg) {
            self.cursor = 0;
        } else if self.keymap.go_to_end.matches(key_msg) {
            self.cursor = self.choices.len().saturating_sub(1);
        } else if self.keymap.remove.matches(key_msg) {
            if let Some(id) = self.choices.ids().get(self.cursor).cloned() {
                self.remove(&id);
            }
        }
        None
    }

    fn emit(&mut self, event: ListEvent) {
        if let ListEvent::Removed(choice) = &event {
            for listener in &mut self.remove_listeners {
                listener(choice);
            }
        }
        self.pending.push(event);
        self.notify_change();
    }

    fn notify_change(&mut self) {
        if self.change_listeners.is_empty() {
            return;
        }
        let ordered = self.choices.to_vec();
        for listener in &mut self.change_listeners {
            listener(&ordered);
        }
    }
}
