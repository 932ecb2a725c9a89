//! View rendering for the selection list.

use super::model::Model;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string to the given display width, appending an ellipsis when
/// anything was cut.
pub(crate) fn truncate_to_width(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

impl Model {
    /// Renders the selection list: the empty-selection message, or the
    /// entries in order. While a drag is in progress the dragged entry is
    /// hidden from the flow and a placeholder line marks the candidate drop
    /// slot.
    pub fn view(&self) -> String {
        if self.is_empty() {
            return self
                .styles()
                .no_items
                .clone()
                .render(&self.strings().none_selected);
        }

        let slot = self.drag.placeholder_slot(self.ids());
        let source = self.drag.source().map(str::to_string);

        let mut lines = Vec::new();
        let mut visible = 0;
        for (index, choice) in self.items().enumerate() {
            if source.as_deref() == Some(choice.id.as_str()) {
                continue;
            }
            if slot == Some(visible) {
                lines.push(self.placeholder_line());
            }
            lines.push(self.delegate().render(self, index, choice));
            visible += 1;
        }
        if slot == Some(visible) {
            lines.push(self.placeholder_line());
        }

        lines.join("\n")
    }

    fn placeholder_line(&self) -> String {
        self.styles()
            .placeholder
            .clone()
            .render(&"┄".repeat(self.width()))
    }
}
