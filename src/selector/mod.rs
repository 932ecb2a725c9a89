//! Suggestion selector component: the pool of selectable-but-not-yet-chosen
//! candidates behind a search input.
//!
//! Typing into the input reschedules a quiet-period timer; only when the
//! timer elapses unchallenged does the remote lookup fire, as a command that
//! later delivers a [`LookupResultsMsg`]. Without a lookup the pool is
//! narrowed locally by fuzzy match instead. The dropdown opens on focus when
//! candidates exist, closes on dismiss, and the confirm key selects the
//! highlighted candidate rather than submitting anything.

mod keys;
mod model;
mod style;

#[cfg(test)]
mod tests;

pub use keys::SelectorKeyMap;
pub use model::{
    AdmitPredicate, DismissMsg, Lookup, LookupResultsMsg, Model, SelectListener,
};
pub use style::SelectorStyles;

use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use bubbletea_widgets::{help, key, Component};
use std::time::Duration;

impl help::KeyMap for Model {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.keymap().move_up,
            &self.keymap().move_down,
            &self.keymap().select,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.keymap().move_up, &self.keymap().move_down],
            vec![&self.keymap().select, &self.keymap().close],
        ]
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus()
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Duration::from_millis(250)), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
