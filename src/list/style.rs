//! Styling for the selection list.

use lipgloss_extras::prelude::*;

/// Styles for the selection-list UI elements. All defaults use adaptive
/// colors so they read well on light and dark terminals.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Style for a normal entry line.
    pub item: Style,
    /// Style for the entry under the cursor.
    pub current_item: Style,
    /// Style for the close marker at the end of each entry.
    pub close_marker: Style,
    /// Style for the drop-position placeholder line.
    pub placeholder: Style,
    /// Style for the empty-selection message.
    pub no_items: Style,
    /// Style for the help area.
    pub help_style: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            item: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            current_item: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            close_marker: Style::new().foreground(subdued_color),
            placeholder: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            help_style: Style::new().padding(1, 0, 0, 2),
        }
    }
}
