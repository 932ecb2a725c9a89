//! Styling for the suggestion selector.

use lipgloss_extras::prelude::*;

/// Styles for the selector's input, dropdown, and status lines.
#[derive(Debug, Clone)]
pub struct SelectorStyles {
    /// Style for a normal candidate line.
    pub suggestion: Style,
    /// Style for the highlight marker in front of the current candidate.
    pub cursor_marker: Style,
    /// Style for characters matched by the local filter.
    pub match_highlight: Style,
    /// Style for the disabled-state reason line.
    pub disabled_reason: Style,
    /// Style for the loading line shown while a lookup is pending.
    pub loading: Style,
    /// Style for the no-matches message.
    pub no_matches: Style,
}

impl Default for SelectorStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            suggestion: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            cursor_marker: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            match_highlight: Style::new().underline(true),
            disabled_reason: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            loading: Style::new().foreground(AdaptiveColor {
                Light: "#8E8E8E",
                Dark: "#747373",
            }),
            no_matches: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}
