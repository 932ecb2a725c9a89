//! Key bindings for the suggestion selector.

use bubbletea_widgets::key;
use crossterm::event::KeyCode;

/// Key bindings for navigating the suggestion dropdown.
///
/// `select` deliberately captures the primary confirm key: it picks the
/// highlighted candidate and never falls through to submit anything.
#[derive(Debug, Clone)]
pub struct SelectorKeyMap {
    /// Move the highlight up one candidate.
    pub move_up: key::Binding,
    /// Move the highlight down one candidate.
    pub move_down: key::Binding,
    /// Select the highlighted candidate.
    pub select: key::Binding,
    /// Close the dropdown.
    pub close: key::Binding,
}

impl Default for SelectorKeyMap {
    fn default() -> Self {
        Self {
            move_up: key::Binding::new(vec![KeyCode::Up]).with_help("↑", "previous suggestion"),
            move_down: key::Binding::new(vec![KeyCode::Down]).with_help("↓", "next suggestion"),
            select: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
            close: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "close"),
        }
    }
}

impl key::KeyMap for SelectorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.move_up, &self.move_down, &self.select]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.move_up, &self.move_down],
            vec![&self.select, &self.close],
        ]
    }
}
