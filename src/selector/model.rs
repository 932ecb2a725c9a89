//! Model for the suggestion selector: the pool of not-yet-chosen candidates.

use super::keys::SelectorKeyMap;
use super::style::SelectorStyles;
use crate::choice::{Choice, Choices};
use crate::config::Strings;
use crate::debounce::{Debouncer, ElapsedMsg};
use crate::native::NativeSelect;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Msg};
use bubbletea_widgets::{spinner, textinput};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// The remote lookup collaborator: a black-box function from a query to
/// result rows. Retries and timeouts are its own business; the selector
/// wraps each invocation in a command and applies whatever comes back.
pub type Lookup = Arc<dyn Fn(&str) -> Vec<Choice> + Send + Sync>;

/// Predicate deciding whether a lookup result may enter the candidate pool.
pub type AdmitPredicate = Box<dyn Fn(&Choice) -> bool + Send + Sync>;

/// Listener invoked with each selected choice.
pub type SelectListener = Box<dyn FnMut(&Choice) + Send>;

/// Results of one remote lookup, tagged with the selector instance and the
/// originating query.
///
/// Results are applied in completion order: when two lookups overlap, the
/// last one to complete wins, whichever query it belonged to. Callers that
/// need strict ordering can compare `query` against the current input before
/// forwarding the message.
#[derive(Debug, Clone)]
pub struct LookupResultsMsg {
    /// Id of the selector instance that fired the lookup.
    pub id: i64,
    /// The query the lookup ran with.
    pub query: String,
    /// The result rows.
    pub results: Vec<Choice>,
}

/// Click-outside surrogate: closes the dropdown.
#[derive(Debug, Clone, Copy)]
pub struct DismissMsg;

/// The suggestion selector: a search input over a candidate pool, with an
/// optional debounced remote lookup and a dropdown for picking candidates.
pub struct Model {
    candidates: Choices,
    snapshot: Choices,
    pub(super) input: textinput::Model,
    spinner: spinner::Model,
    open: bool,
    loading: bool,
    enabled: bool,
    disabled_reason: Option<String>,
    cursor: usize,
    matched: Option<Vec<(String, Vec<usize>)>>,
    debounce: Debouncer,
    lookup: Option<Lookup>,
    admit: Option<AdmitPredicate>,
    keymap: SelectorKeyMap,
    styles: SelectorStyles,
    strings: Strings,
    last_query: String,
    chosen: Vec<Choice>,
    select_listeners: Vec<SelectListener>,
}

impl Model {
    /// Creates an enabled, empty selector with the given search quiet period.
    pub fn new(search_debounce: Duration) -> Self {
        let strings = Strings::default();
        let mut input = textinput::new();
        input.set_placeholder(&strings.placeholder);
        Self {
            candidates: Choices::new(),
            snapshot: Choices::new(),
            input,
            spinner: spinner::new(&[]),
            open: false,
            loading: false,
            enabled: true,
            disabled_reason: None,
            cursor: 0,
            matched: None,
            debounce: Debouncer::new(search_debounce),
            lookup: None,
            admit: None,
            keymap: SelectorKeyMap::default(),
            styles: SelectorStyles::default(),
            strings,
            last_query: String::new(),
            chosen: Vec::new(),
            select_listeners: Vec::new(),
        }
    }

    /// Installs the remote lookup, builder style.
    pub fn with_lookup(mut self, lookup: Lookup) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Installs the admission predicate applied to lookup results, builder
    /// style.
    pub fn with_admit(mut self, admit: AdmitPredicate) -> Self {
        self.admit = Some(admit);
        self
    }

    /// Replaces the localized strings, builder style.
    pub fn with_strings(mut self, strings: Strings) -> Self {
        self.input.set_placeholder(&strings.placeholder);
        self.strings = strings;
        self
    }

    /// Sets the input width, builder style.
    pub fn with_width(mut self, width: usize) -> Self {
        self.input.set_width(width as i32);
        self
    }

    /// Replaces the key bindings, builder style.
    pub fn with_keymap(mut self, keymap: SelectorKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Registers a listener invoked with each selected choice.
    pub fn on_select(&mut self, listener: SelectListener) {
        self.select_listeners.push(listener);
    }

    /// Unique id of this instance, used to tag its lookup messages.
    pub fn instance_id(&self) -> i64 {
        self.debounce.id()
    }

    /// Populates the pool from the control's currently-unselected entries and
    /// captures the snapshot [`Model::reset`] restores.
    pub fn load_from(&mut self, control: &NativeSelect, data_fields: &[String]) {
        self.candidates.clear();
        for choice in control.unselected_choices(data_fields) {
            self.candidates.push(choice);
        }
        self.snapshot = self.candidates.clone();
        self.matched = None;
        self.cursor = 0;
        self.open = false;
        self.loading = false;
    }

    /// Restores the pool captured at the last [`Model::load_from`] and clears
    /// the search state.
    pub fn reset(&mut self) {
        self.candidates = self.snapshot.clone();
        self.matched = None;
        self.cursor = 0;
        self.open = false;
        self.loading = false;
        self.debounce.cancel();
        self.input.set_value("");
        self.last_query.clear();
    }

    /// Inserts a candidate, overwriting by id.
    pub fn add(&mut self, choice: Choice) {
        self.candidates.insert_overwrite(choice);
        if self.matched.is_some() && !self.last_query.is_empty() {
            let query = self.last_query.clone();
            self.local_filter(&query);
        }
    }

    /// Removes and returns a candidate by id, notifying select listeners.
    /// Closes the dropdown.
    pub fn select(&mut self, id: &str) -> Option<Choice> {
        let choice = self.candidates.remove(id)?;
        if let Some(matched) = &mut self.matched {
            matched.retain(|(mid, _)| mid != id);
        }
        self.cursor = self.cursor.min(self.visible_len().saturating_sub(1));
        self.open = false;
        for listener in &mut self.select_listeners {
            listener(&choice);
        }
        Some(choice)
    }

    /// Selects the candidate under the highlight, queueing it for
    /// [`Model::drain_selected`].
    pub fn select_highlighted(&mut self) -> Option<Choice> {
        let id = self
            .visible()
            .get(self.cursor)
            .map(|(choice, _)| choice.id.clone())?;
        let choice = self.select(&id)?;
        self.chosen.push(choice.clone());
        Some(choice)
    }

    /// Drains the choices selected through [`Model::update`] since the last
    /// call.
    pub fn drain_selected(&mut self) -> Vec<Choice> {
        std::mem::take(&mut self.chosen)
    }

    /// Starts a search for `query`. An empty query is a no-op. With a lookup
    /// installed this only arms the debounce timer; the lookup itself fires
    /// when the quiet period elapses. Without one, the candidate pool is
    /// narrowed by a local fuzzy filter instead.
    pub fn search(&mut self, query: &str) -> Option<Cmd> {
        if !self.enabled {
            return None;
        }
        if query.is_empty() {
            self.matched = None;
            self.cursor = 0;
            self.debounce.cancel();
            return None;
        }
        if self.lookup.is_some() {
            return Some(self.debounce.schedule());
        }
        self.local_filter(query);
        None
    }

    /// Handles an elapsed quiet period: fires the lookup when the message
    /// belongs to the current schedule.
    fn debounce_elapsed(&mut self, elapsed: &ElapsedMsg) -> Option<Cmd> {
        if !self.enabled || !self.debounce.matches(elapsed) {
            return None;
        }
        let lookup = self.lookup.as_ref().map(Arc::clone)?;
        let query = self.input.value();
        if query.is_empty() {
            return None;
        }
        debug!(%query, "firing suggestion lookup");
        self.loading = true;
        let id = self.instance_id();
        Some(bubbletea_tick(Duration::from_nanos(1), move |_| {
            let results = lookup(&query);
            Box::new(LookupResultsMsg { id, query: query.clone(), results }) as Msg
        }))
    }

    /// Replaces the candidate pool with lookup results, string-coercing ids
    /// and applying the admission predicate. Opens the dropdown when the pool
    /// ends up non-empty, closes it otherwise.
    pub fn apply_results(&mut self, query: &str, results: Vec<Choice>) {
        self.loading = false;
        self.candidates.clear();
        for choice in results {
            if self.admit.as_ref().map_or(true, |admit| admit(&choice)) {
                self.candidates.insert_overwrite(choice);
            }
        }
        self.matched = None;
        self.cursor = 0;
        self.open = !self.candidates.is_empty();
        debug!(%query, count = self.candidates.len(), "applied lookup results");
    }

    /// Re-enables the input after [`Model::disable`].
    pub fn enable(&mut self) {
        self.enabled = true;
        self.disabled_reason = None;
    }

    /// Disables the input, force-closing the dropdown and surfacing a
    /// human-readable reason.
    pub fn disable(&mut self, reason: impl Into<String>) {
        self.enabled = false;
        self.disabled_reason = Some(reason.into());
        self.open = false;
        self.loading = false;
        self.input.blur();
    }

    /// Whether the input currently accepts interaction.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The disabled-state reason, when disabled.
    pub fn disabled_reason(&self) -> Option<&str> {
        self.disabled_reason.as_deref()
    }

    /// Whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a lookup is pending.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the search input has focus.
    pub fn focused(&self) -> bool {
        self.input.focused()
    }

    /// The current search query.
    pub fn query(&self) -> String {
        self.input.value()
    }

    /// Number of candidates in the pool.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True when the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Membership test by id.
    pub fn contains(&self, id: &str) -> bool {
        self.candidates.contains(id)
    }

    /// Iterates the candidate pool in iteration order.
    pub fn candidates(&self) -> impl Iterator<Item = &Choice> {
        self.candidates.iter()
    }

    /// Highlight position within the visible candidates.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Candidates currently shown in the dropdown, with local-filter match
    /// indices when a filter is active.
    pub fn visible(&self) -> Vec<(&Choice, Option<&[usize]>)> {
        match &self.matched {
            None => self.candidates.iter().map(|c| (c, None)).collect(),
            Some(matched) => matched
                .iter()
                .filter_map(|(id, indices)| {
                    self.candidates
                        .get(id)
                        .map(|c| (c, Some(indices.as_slice())))
                })
                .collect(),
        }
    }

    fn visible_len(&self) -> usize {
        match &self.matched {
            None => self.candidates.len(),
            Some(matched) => matched.len(),
        }
    }

    fn local_filter(&mut self, query: &str) {
        let matcher = SkimMatcherV2::default();
        let matched: Vec<(String, Vec<usize>)> = self
            .candidates
            .iter()
            .filter_map(|choice| {
                matcher
                    .fuzzy_indices(&choice.name, query)
                    .map(|(_, indices)| (choice.id.clone(), indices))
            })
            .collect();
        self.cursor = 0;
        self.open = !matched.is_empty();
        self.matched = Some(matched);
    }

    /// Handles key, dismiss, debounce, and lookup-result messages.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(elapsed) = msg.downcast_ref::<ElapsedMsg>() {
            return self.debounce_elapsed(elapsed);
        }
        if let Some(results) = msg.downcast_ref::<LookupResultsMsg>() {
            if results.id == self.instance_id() {
                self.apply_results(&results.query, results.results.clone());
            }
            return None;
        }
        if msg.downcast_ref::<DismissMsg>().is_some() {
            self.open = false;
            return None;
        }

        if !self.enabled || !self.input.focused() {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.move_up.matches(key_msg) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if self.keymap.move_down.matches(key_msg) {
            if self.cursor + 1 < self.visible_len() {
                self.cursor += 1;
            }
        } else if self.keymap.select.matches(key_msg) {
            // The confirm key never falls through to the input.
            if self.open {
                self.select_highlighted();
            }
        } else if self.keymap.close.matches(key_msg) {
            self.open = false;
        } else {
            let forward = Box::new(KeyMsg {
                key: key_msg.key,
                modifiers: key_msg.modifiers,
            }) as Msg;
            self.input.update(forward);
            let query = self.input.value();
            if query != self.last_query {
                self.last_query = query.clone();
                return self.search(&query);
            }
        }
        None
    }

    /// Gives the input focus, opening the dropdown when candidates exist.
    pub fn focus(&mut self) -> Option<Cmd> {
        if !self.enabled {
            return None;
        }
        if !self.candidates.is_empty() {
            self.open = true;
        }
        Some(self.input.focus())
    }

    /// Removes focus from the input.
    pub fn blur(&mut self) {
        self.input.blur();
    }

    /// Renders the input line, any status line, and the dropdown.
    pub fn view(&self) -> String {
        let mut sections = vec![self.input.view()];

        if let Some(reason) = &self.disabled_reason {
            sections.push(self.styles.disabled_reason.clone().render(reason));
        }

        if self.loading {
            sections.push(self.styles.loading.clone().render(&format!(
                "{} {}",
                self.spinner.view(),
                self.strings.searching
            )));
        }

        if self.open {
            let visible = self.visible();
            if visible.is_empty() {
                sections.push(self.styles.no_matches.clone().render(&self.strings.no_matches));
            } else {
                for (index, (choice, indices)) in visible.iter().enumerate() {
                    sections.push(self.render_candidate(choice, *indices, index == self.cursor));
                }
            }
        }

        sections.join("\n")
    }

    fn render_candidate(
        &self,
        choice: &Choice,
        indices: Option<&[usize]>,
        highlighted: bool,
    ) -> String {
        let mut name = String::new();
        match indices {
            Some(indices) => {
                for (i, ch) in choice.name.chars().enumerate() {
                    if indices.contains(&i) {
                        name.push_str(
                            &self
                                .styles
                                .match_highlight
                                .clone()
                                .render(&ch.to_string()),
                        );
                    } else {
                        name.push(ch);
                    }
                }
            }
            None => name.push_str(&choice.name),
        }
        if highlighted {
            format!("{} {name}", self.styles.cursor_marker.clone().render("❯"))
        } else {
            format!("  {}", self.styles.suggestion.clone().render(&name))
        }
    }

    pub(super) fn keymap(&self) -> &SelectorKeyMap {
        &self.keymap
    }
}
