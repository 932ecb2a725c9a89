//! Selection list component: ordered chosen entries with drag-and-drop
//! reordering and removal.
//!
//! The list keeps the chosen entries in insertion order, mirrors every change
//! to its listeners, and supports three mutation families:
//! - `add`/`remove`, gated by the optional selection cap,
//! - `reorder_before`/`reorder_after`, index-based moves,
//! - `reset`, restoring the snapshot captured at the last `load_from`.
//!
//! Drag interaction is modeled by the [`drag`] submodule's state machine,
//! driven by typed [`DragEvent`]s rather than any concrete pointer API, so
//! the whole protocol is testable headlessly. Keyboard interaction (cursor
//! movement, removal) follows the usual key-binding conventions and feeds
//! the help system.

mod delegate;
mod drag;
mod events;
mod keys;
mod model;
mod rendering;
mod style;


pub use delegate::{DefaultDelegate, ItemDelegate};
pub use drag::{drop_side, DragEvent, DragMsg, DragState, DropSide};
pub use events::{ChangeListener, ListEvent, RemoveListener};
pub use keys::ListKeyMap;
pub use model::Model;
pub use style::ListStyles;

use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use bubbletea_widgets::{help, key};

impl help::KeyMap for Model {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.keymap().cursor_up,
            &self.keymap().cursor_down,
            &self.keymap().remove,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.keymap().cursor_up,
                &self.keymap().cursor_down,
                &self.keymap().go_to_start,
                &self.keymap().go_to_end,
            ],
            vec![&self.keymap().remove],
        ]
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
