//! Cancellable delayed-action primitive.
//!
//! A [`Debouncer`] models a quiet-period timer as an explicit value:
//! [`Debouncer::schedule`] arms it and returns a command that delivers an
//! [`ElapsedMsg`] after the delay; scheduling again before the message
//! arrives invalidates the earlier one, because each schedule bumps a
//! generation counter and [`Debouncer::matches`] accepts only the current
//! generation. Instances carry a unique id so several debouncers can coexist
//! in one program without picking up each other's messages.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Unique instance ids, shared with the rest of the crate for message
/// routing.
pub(crate) fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Message delivered when a scheduled quiet period elapses.
///
/// Stale messages (from a schedule that has since been superseded) carry an
/// older generation and are rejected by [`Debouncer::matches`].
#[derive(Debug, Clone)]
pub struct ElapsedMsg {
    /// Id of the debouncer instance that scheduled this message.
    pub id: i64,
    /// Schedule generation this message belongs to.
    pub generation: u64,
}

/// A generation-tagged quiet-period timer.
///
/// # Examples
///
/// ```
/// use bubbletea_multilist::debounce::{Debouncer, ElapsedMsg};
/// use std::time::Duration;
///
/// let mut debounce = Debouncer::new(Duration::from_millis(250));
/// let _cmd = debounce.schedule();
/// let stale = ElapsedMsg { id: debounce.id(), generation: 0 };
/// assert!(!debounce.matches(&stale));
/// ```
#[derive(Debug)]
pub struct Debouncer {
    id: i64,
    delay: Duration,
    generation: u64,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            id: next_id(),
            delay,
            generation: 0,
        }
    }

    /// This instance's unique id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms the timer. Any previously scheduled message becomes stale.
    pub fn schedule(&mut self) -> Cmd {
        self.generation += 1;
        let id = self.id;
        let generation = self.generation;
        bubbletea_tick(self.delay, move |_| {
            Box::new(ElapsedMsg { id, generation }) as Msg
        })
    }

    /// Invalidates any pending schedule without arming a new one.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// True when the message belongs to this instance's current schedule.
    pub fn matches(&self, msg: &ElapsedMsg) -> bool {
        msg.id == self.id && msg.generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reschedule_invalidates_prior_generation() {
        let mut debounce = Debouncer::new(Duration::from_millis(10));
        let _first = debounce.schedule();
        let first_elapsed = ElapsedMsg {
            id: debounce.id(),
            generation: 1,
        };
        assert!(debounce.matches(&first_elapsed));

        let _second = debounce.schedule();
        assert!(!debounce.matches(&first_elapsed));
        assert!(debounce.matches(&ElapsedMsg {
            id: debounce.id(),
            generation: 2,
        }));
    }

    #[test]
    fn cancel_invalidates_pending_schedule() {
        let mut debounce = Debouncer::new(Duration::from_millis(10));
        let _cmd = debounce.schedule();
        debounce.cancel();
        assert!(!debounce.matches(&ElapsedMsg {
            id: debounce.id(),
            generation: 1,
        }));
    }

    #[test]
    fn instances_do_not_cross_match() {
        let mut a = Debouncer::new(Duration::from_millis(10));
        let mut b = Debouncer::new(Duration::from_millis(10));
        let _a = a.schedule();
        let _b = b.schedule();
        let from_b = ElapsedMsg {
            id: b.id(),
            generation: 1,
        };
        assert!(!a.matches(&from_b));
        assert!(b.matches(&from_b));
    }
}
