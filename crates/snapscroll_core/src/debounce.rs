//! Cancel-and-reschedule debounce primitive
//!
//! Collapses a burst of triggers into a single firing once a quiet window
//! has elapsed. Used for resize reconciliation, where continuous viewport
//! resizing would otherwise cause a reconciliation storm.
//!
//! The debouncer holds no timer of its own; the embedder polls
//! [`Debouncer::fire`] from its frame loop.

use std::time::{Duration, Instant};

/// A deadline-based debouncer.
///
/// Every [`trigger`](Debouncer::trigger) pushes the deadline out by the quiet
/// window; [`fire`](Debouncer::fire) reports `true` exactly once after the
/// last trigger's window has passed.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the debouncer from the current time.
    pub fn trigger(&mut self) {
        self.trigger_at(Instant::now());
    }

    /// Arm (or re-arm) the debouncer from an explicit time.
    pub fn trigger_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// Whether a firing is pending.
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop any pending firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` once, when the quiet window after the last trigger has
    /// elapsed at `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
