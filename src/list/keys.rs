//! Key bindings for selection-list navigation and removal.

use bubbletea_widgets::key;
use crossterm::event::KeyCode;

/// Key bindings for moving the cursor through the selection and removing the
/// entry under it.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Move the cursor up one entry.
    pub cursor_up: key::Binding,
    /// Move the cursor down one entry.
    pub cursor_down: key::Binding,
    /// Jump to the first entry.
    pub go_to_start: key::Binding,
    /// Jump to the last entry.
    pub go_to_end: key::Binding,
    /// Remove the entry under the cursor.
    pub remove: key::Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            go_to_start: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to start"),
            go_to_end: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to end"),
            remove: key::Binding::new(vec![KeyCode::Char('x'), KeyCode::Delete])
                .with_help("x/del", "remove"),
        }
    }
}

impl key::KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.remove]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.go_to_start,
                &self.go_to_end,
            ],
            vec![&self.remove],
        ]
    }
}
