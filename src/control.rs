//! The coordinating widget: selection list + suggestion selector + native
//! control, kept in sync.
//!
//! Selecting a suggestion moves it into the selection list; removing a list
//! entry returns it to the suggestion pool; every selection change is
//! committed back to the native control with replace-all semantics and the
//! selector is enabled or disabled against the selection cap. The two
//! collections stay disjoint by construction, except transiently inside a
//! move.

use crate::choice::Choice;
use crate::config::{Config, ConfigError};
use crate::debounce::ElapsedMsg;
use crate::list::{self, ChangeListener, DragMsg, ListEvent, RemoveListener};
use crate::native::NativeSelect;
use crate::selector::{self, DismissMsg, Lookup, LookupResultsMsg, SelectListener};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use bubbletea_widgets::{help, key, Component};
use crossterm::event::KeyCode;
use tracing::debug;

/// The multi-select widget.
///
/// # Examples
///
/// ```
/// use bubbletea_multilist::{Config, MultiList, NativeSelect, OptionEntry};
///
/// let control = NativeSelect::from_entries(vec![
///     OptionEntry::new("a", "Alpha").with_selected(true),
///     OptionEntry::new("b", "Beta"),
/// ]);
/// let mut widget = MultiList::new(control, Config::default()).unwrap();
///
/// assert_eq!(widget.selected().len(), 1);
/// widget.select("b");
/// assert_eq!(widget.selected().len(), 2);
/// ```
pub struct Model {
    list: list::Model,
    selector: selector::Model,
    native: NativeSelect,
    config: Config,
    help: help::Model,
    focus_toggle: key::Binding,
}

impl Model {
    /// Builds the widget from a native control and a validated configuration.
    /// Selected entries seed the selection list, unselected entries seed the
    /// suggestion pool, both in the control's document order.
    pub fn new(native: NativeSelect, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(native, config))
    }

    fn assemble(native: NativeSelect, config: Config) -> Self {
        let mut list = list::Model::new()
            .with_max_selected(config.max_selected)
            .with_width(config.width)
            .with_strings(config.strings.clone());
        let mut selector = selector::Model::new(config.search_debounce)
            .with_width(config.width)
            .with_strings(config.strings.clone());
        list.load_from(&native, &config.data);
        selector.load_from(&native, &config.data);

        let mut model = Self {
            list,
            selector,
            native,
            config,
            help: help::Model::new(),
            focus_toggle: key::Binding::new(vec![KeyCode::Tab]).with_help("tab", "switch focus"),
        };
        model.sync_gate();
        model
    }

    /// Installs the remote lookup on the selector, builder style.
    pub fn with_lookup(mut self, lookup: Lookup) -> Self {
        self.selector = self.selector.with_lookup(lookup);
        self
    }

    /// Read-only view of the current ordered selection.
    pub fn selected(&self) -> Vec<Choice> {
        self.list.ordered()
    }

    /// The native control in its current committed state.
    pub fn native(&self) -> &NativeSelect {
        &self.native
    }

    /// The selection-list component.
    pub fn list(&self) -> &list::Model {
        &self.list
    }

    /// The suggestion-selector component.
    pub fn selector(&self) -> &selector::Model {
        &self.selector
    }

    /// Registers a selection-change listener on the list.
    pub fn on_change(&mut self, listener: ChangeListener) {
        self.list.on_change(listener);
    }

    /// Registers a removal listener on the list.
    pub fn on_remove(&mut self, listener: RemoveListener) {
        self.list.on_remove(listener);
    }

    /// Registers a selection listener on the selector.
    pub fn on_select(&mut self, listener: SelectListener) {
        self.selector.on_select(listener);
    }

    /// Moves a candidate from the suggestion pool into the selection.
    /// Returns whether the selection actually grew.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.selector.is_enabled() {
            return false;
        }
        let Some(choice) = self.selector.select(id) else {
            return false;
        };
        if !self.list.add(choice.clone()) {
            // The list refused (cap raced, duplicate); the candidate must not
            // be lost, so it goes back to the pool.
            self.selector.add(choice);
            return false;
        }
        self.after_update();
        true
    }

    /// Removes an entry from the selection, returning it to the suggestion
    /// pool.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.list.remove(id).is_some();
        self.after_update();
        removed
    }

    /// Moves `source` immediately before `target` in the selection.
    pub fn reorder_before(&mut self, source: &str, target: &str) -> bool {
        let moved = self.list.reorder_before(source, target);
        self.after_update();
        moved
    }

    /// Moves `source` immediately after `target` in the selection.
    pub fn reorder_after(&mut self, source: &str, target: &str) -> bool {
        let moved = self.list.reorder_after(source, target);
        self.after_update();
        moved
    }

    /// Restores both components to the snapshot captured at construction and
    /// recommits it to the native control.
    pub fn reset(&mut self) {
        self.list.reset();
        self.selector.reset();
        self.list.drain_events();
        self.commit();
        self.sync_gate();
    }

    /// Routes messages to the components and keeps the wiring invariants:
    /// drained selections enter the list, drained removals return to the
    /// pool, and any selection change is committed to the native control.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(results) = msg.downcast_ref::<LookupResultsMsg>() {
            if results.id == self.selector.instance_id() {
                // Admission filter: whatever is already selected stays out of
                // the suggestion pool.
                let admitted: Vec<Choice> = results
                    .results
                    .iter()
                    .filter(|c| !self.list.contains(&c.id))
                    .cloned()
                    .collect();
                self.selector.apply_results(&results.query, admitted);
            }
            return None;
        }

        let cmd = if msg.downcast_ref::<DragMsg>().is_some() {
            self.list.update(msg)
        } else if msg.downcast_ref::<ElapsedMsg>().is_some()
            || msg.downcast_ref::<DismissMsg>().is_some()
        {
            self.selector.update(msg)
        } else if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.focus_toggle.matches(key_msg) {
                return self.toggle_focus();
            }
            if self.selector.focused() {
                self.selector.update(msg)
            } else {
                self.list.update(msg)
            }
        } else {
            None
        };

        self.after_update();
        cmd
    }

    fn toggle_focus(&mut self) -> Option<Cmd> {
        if self.selector.focused() {
            self.selector.blur();
            None
        } else {
            self.selector.focus()
        }
    }

    fn after_update(&mut self) {
        for choice in self.selector.drain_selected() {
            if !self.list.add(choice.clone()) {
                self.selector.add(choice);
            }
        }

        let events = self.list.drain_events();
        if events.is_empty() {
            return;
        }
        for event in &events {
            if let ListEvent::Removed(choice) = event {
                self.selector.add(choice.clone());
            }
        }
        self.commit();
        self.sync_gate();
    }

    fn commit(&mut self) {
        let ordered = self.list.ordered();
        debug!(count = ordered.len(), "committing selection to native control");
        self.native.commit(&ordered);
    }

    fn sync_gate(&mut self) {
        if self.list.is_full() {
            if self.selector.is_enabled() {
                self.selector
                    .disable(self.config.strings.limit_reached.clone());
            }
        } else if !self.selector.is_enabled() {
            self.selector.enable();
        }
    }

    /// Renders the selection list above the selector, with a help footer.
    pub fn view(&self) -> String {
        let mut sections = vec![self.list.view(), self.selector.view()];
        let help_view = self.help.view(self);
        if !help_view.is_empty() {
            sections.push(help_view);
        }
        sections.join("\n")
    }
}

impl help::KeyMap for Model {
    fn short_help(&self) -> Vec<&key::Binding> {
        let mut bindings = if self.selector.focused() {
            help::KeyMap::short_help(&self.selector)
        } else {
            help::KeyMap::short_help(&self.list)
        };
        bindings.push(&self.focus_toggle);
        bindings
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        let mut groups = help::KeyMap::full_help(&self.list);
        groups.extend(help::KeyMap::full_help(&self.selector));
        groups.push(vec![&self.focus_toggle]);
        groups
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.selector.focus()
    }

    fn blur(&mut self) {
        self.selector.blur()
    }

    fn focused(&self) -> bool {
        self.selector.focused()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::assemble(NativeSelect::new(), Config::default()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
