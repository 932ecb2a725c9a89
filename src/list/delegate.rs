//! Item rendering delegates for the selection list.

use super::model::Model;
use super::rendering::truncate_to_width;
use crate::choice::Choice;

/// Controls how one selection entry is rendered.
///
/// The delegate receives the whole model so it can compare the index against
/// the cursor and reach the configured styles and width.
pub trait ItemDelegate {
    /// Renders the entry at `index` as one line.
    fn render(&self, m: &Model, index: usize, choice: &Choice) -> String;
}

/// Default rendering: a cursor marker, the choice name, and a close marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDelegate;

impl ItemDelegate for DefaultDelegate {
    fn render(&self, m: &Model, index: usize, choice: &Choice) -> String {
        let styles = m.styles();
        let name = truncate_to_width(&choice.name, m.width().saturating_sub(4));
        let close = styles.close_marker.clone().render("✕");
        if index == m.cursor() {
            format!("{} {close}", styles.current_item.clone().render(&format!("❯ {name}")))
        } else {
            format!("{} {close}", styles.item.clone().render(&format!("  {name}")))
        }
    }
}
