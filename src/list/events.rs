//! Typed change events emitted by the selection list.

use crate::choice::Choice;

/// One mutation of the selection list.
///
/// Events are delivered synchronously to registered listeners after the
/// mutation has fully completed; no observer ever sees a partially-mutated
/// collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// A choice was appended to the selection.
    Added(Choice),
    /// A choice was removed from the selection.
    Removed(Choice),
    /// A choice moved to a new position.
    Reordered {
        /// Id of the moved choice.
        id: String,
        /// Index before the move.
        from: usize,
        /// Index after the move.
        to: usize,
    },
}

/// Listener invoked with every mutation and the resulting ordered collection.
pub type ChangeListener = Box<dyn FnMut(&[Choice]) + Send>;

/// Listener invoked with each removed choice.
pub type RemoveListener = Box<dyn FnMut(&Choice) + Send>;
