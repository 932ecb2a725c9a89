//! Pointer-driven drag-reorder state machine.
//!
//! The machine is independent of any rendering technology: hosts translate
//! their pointer events into [`DragEvent`] values and feed them in (wrapped
//! in a [`DragMsg`] when going through `update`). It moves through three
//! phases (idle, dragging, settling) and the list consumes the settled
//! outcome to apply the actual reorder.
//!
//! While dragging, the dragged entry is hidden from the rendered flow and a
//! placeholder marks the candidate drop slot. Hovering a new entry takes
//! effect immediately; repeated hover ticks over the same flow are damped to
//! every third tick so the placeholder does not thrash under rapid pointer
//! movement.

use tracing::{debug, trace};

/// Which side of the hover target a drop would land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSide {
    /// Insert immediately before the target.
    Before,
    /// Insert immediately after the target.
    After,
}

/// Computes the drop side from the vertical pointer offset within the target:
/// at or below the midpoint lands after it, above lands before it.
///
/// # Examples
///
/// ```
/// use bubbletea_multilist::list::{drop_side, DropSide};
///
/// assert_eq!(drop_side(0, 2), DropSide::Before);
/// assert_eq!(drop_side(1, 2), DropSide::After);
/// ```
pub fn drop_side(pointer_offset: u16, target_height: u16) -> DropSide {
    if f32::from(pointer_offset) >= f32::from(target_height) / 2.0 {
        DropSide::After
    } else {
        DropSide::Before
    }
}

/// Inputs driving the drag machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// A drag began over the entry with this id.
    Start {
        /// Id of the dragged entry.
        source: String,
    },
    /// The pointer entered a new candidate target. Takes effect immediately
    /// and resets the hover tick counter.
    Enter {
        /// Id of the hovered entry.
        target: String,
        /// Side the drop would land on.
        side: DropSide,
    },
    /// The pointer moved within the list. Damped: only every third tick
    /// updates the candidate target.
    Over {
        /// Id of the hovered entry.
        target: String,
        /// Side the drop would land on.
        side: DropSide,
    },
    /// The drag ended over the list.
    Drop,
    /// The drag ended without a drop (left the widget, was aborted).
    Cancel,
}

impl DragEvent {
    /// Convenience constructor for hosts holding raw pointer geometry:
    /// builds an [`DragEvent::Over`] with the side computed by [`drop_side`].
    pub fn over_at(target: impl Into<String>, pointer_offset: u16, target_height: u16) -> Self {
        DragEvent::Over {
            target: target.into(),
            side: drop_side(pointer_offset, target_height),
        }
    }
}

/// Message wrapper for feeding [`DragEvent`]s through a component `update`.
#[derive(Debug, Clone)]
pub struct DragMsg(pub DragEvent);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Dragging {
        source: String,
        over: Option<(String, DropSide)>,
        ticks: u32,
    },
    Settling {
        source: String,
        outcome: Option<(String, DropSide)>,
    },
}

/// The drag machine: one per widget instance, single pointer, reset at the
/// end of every drag cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    phase: Phase,
}

impl Default for DragState {
    fn default() -> Self {
        Self::new()
    }
}

impl DragState {
    /// A machine in the idle phase.
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// True while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Id of the dragged entry, while dragging.
    pub fn source(&self) -> Option<&str> {
        match &self.phase {
            Phase::Dragging { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Current candidate target and side, while dragging.
    pub fn hover(&self) -> Option<(&str, DropSide)> {
        match &self.phase {
            Phase::Dragging {
                over: Some((target, side)),
                ..
            } => Some((target, *side)),
            _ => None,
        }
    }

    /// Advances the machine by one input event. Events that do not apply in
    /// the current phase are ignored.
    pub fn apply(&mut self, event: DragEvent) {
        match (&mut self.phase, event) {
            (Phase::Idle, DragEvent::Start { source }) => {
                debug!(%source, "drag started");
                self.phase = Phase::Dragging {
                    source,
                    over: None,
                    ticks: 1,
                };
            }
            (Phase::Dragging { over, ticks, .. }, DragEvent::Enter { target, side }) => {
                if over.as_ref().map(|(t, _)| t.as_str()) == Some(target.as_str()) {
                    return;
                }
                *ticks = 1;
                *over = Some((target, side));
            }
            (Phase::Dragging { over, ticks, .. }, DragEvent::Over { target, side }) => {
                *ticks += 1;
                if *ticks % 3 != 0 {
                    return;
                }
                *over = Some((target, side));
            }
            (Phase::Dragging { source, over, .. }, DragEvent::Drop) => {
                let source = std::mem::take(source);
                let outcome = over.take();
                debug!(%source, cancelled = outcome.is_none(), "drag dropped");
                self.phase = Phase::Settling { source, outcome };
            }
            (Phase::Dragging { source, .. }, DragEvent::Cancel) => {
                debug!(source = %source, "drag cancelled");
                self.phase = Phase::Idle;
            }
            (_, event) => {
                trace!(?event, "drag event ignored in current phase");
            }
        }
    }

    /// Consumes a settled drop, returning the dragged id and the outcome:
    /// `None` when no target was ever hovered (the drag is cancelled and the
    /// original order stands). Returns the machine to idle.
    pub fn take_settled(&mut self) -> Option<(String, Option<(String, DropSide)>)> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Settling { source, outcome } => Some((source, outcome)),
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// The slot the placeholder occupies among the visible entries (the
    /// dragged entry is hidden from the flow), or `None` when no candidate
    /// target is hovered.
    pub fn placeholder_slot(&self, ids: &[String]) -> Option<usize> {
        let Phase::Dragging {
            source,
            over: Some((target, side)),
            ..
        } = &self.phase
        else {
            return None;
        };
        let position = ids
            .iter()
            .filter(|id| *id != source)
            .position(|id| id == target)?;
        Some(match side {
            DropSide::Before => position,
            DropSide::After => position + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(state: &mut DragState, source: &str) {
        state.apply(DragEvent::Start {
            source: source.to_string(),
        });
    }

    fn enter(state: &mut DragState, target: &str, side: DropSide) {
        state.apply(DragEvent::Enter {
            target: target.to_string(),
            side,
        });
    }

    fn over(state: &mut DragState, target: &str, side: DropSide) {
        state.apply(DragEvent::Over {
            target: target.to_string(),
            side,
        });
    }

    #[test]
    fn drop_side_splits_at_the_midpoint() {
        assert_eq!(drop_side(0, 4), DropSide::Before);
        assert_eq!(drop_side(1, 4), DropSide::Before);
        assert_eq!(drop_side(2, 4), DropSide::After);
        assert_eq!(drop_side(4, 4), DropSide::After);
    }

    #[test]
    fn drop_without_hover_settles_cancelled() {
        let mut state = DragState::new();
        start(&mut state, "a");
        state.apply(DragEvent::Drop);
        assert_eq!(state.take_settled(), Some(("a".to_string(), None)));
        assert!(!state.is_dragging());
    }

    #[test]
    fn enter_applies_immediately_and_resets_ticks() {
        let mut state = DragState::new();
        start(&mut state, "a");
        enter(&mut state, "b", DropSide::Before);
        assert_eq!(state.hover(), Some(("b", DropSide::Before)));

        // A fresh target needs two more ticks before an Over lands again.
        enter(&mut state, "c", DropSide::After);
        over(&mut state, "b", DropSide::Before);
        assert_eq!(state.hover(), Some(("c", DropSide::After)));
        over(&mut state, "b", DropSide::Before);
        assert_eq!(state.hover(), Some(("b", DropSide::Before)));
    }

    #[test]
    fn over_acts_only_every_third_tick() {
        let mut state = DragState::new();
        start(&mut state, "a");
        // ticks: 2, 3 -> the third tick lands
        over(&mut state, "b", DropSide::After);
        assert_eq!(state.hover(), None);
        over(&mut state, "b", DropSide::After);
        assert_eq!(state.hover(), Some(("b", DropSide::After)));
    }

    #[test]
    fn reentering_the_current_target_is_ignored() {
        let mut state = DragState::new();
        start(&mut state, "a");
        enter(&mut state, "b", DropSide::Before);
        enter(&mut state, "b", DropSide::After);
        // Side is unchanged: the repeated enter did not take effect.
        assert_eq!(state.hover(), Some(("b", DropSide::Before)));
    }

    #[test]
    fn drop_carries_the_last_hover() {
        let mut state = DragState::new();
        start(&mut state, "a");
        enter(&mut state, "b", DropSide::Before);
        enter(&mut state, "c", DropSide::After);
        state.apply(DragEvent::Drop);
        assert_eq!(
            state.take_settled(),
            Some(("a".to_string(), Some(("c".to_string(), DropSide::After))))
        );
    }

    #[test]
    fn cancel_returns_to_idle_without_outcome() {
        let mut state = DragState::new();
        start(&mut state, "a");
        enter(&mut state, "b", DropSide::Before);
        state.apply(DragEvent::Cancel);
        assert!(state.take_settled().is_none());
        assert!(!state.is_dragging());
    }

    #[test]
    fn events_outside_their_phase_are_ignored() {
        let mut state = DragState::new();
        state.apply(DragEvent::Drop);
        assert!(state.take_settled().is_none());
        enter(&mut state, "b", DropSide::Before);
        assert!(!state.is_dragging());
    }

    #[test]
    fn placeholder_slot_hides_the_dragged_entry() {
        let ids: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let mut state = DragState::new();
        start(&mut state, "a");
        assert_eq!(state.placeholder_slot(&ids), None);

        enter(&mut state, "c", DropSide::Before);
        // Visible flow is [b, c]; before c is slot 1.
        assert_eq!(state.placeholder_slot(&ids), Some(1));

        enter(&mut state, "b", DropSide::After);
        assert_eq!(state.placeholder_slot(&ids), Some(1));
        enter(&mut state, "c", DropSide::After);
        assert_eq!(state.placeholder_slot(&ids), Some(2));
    }
}
