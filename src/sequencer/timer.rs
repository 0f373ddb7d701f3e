// Minuteur one-shot annulable pour les transitions d'étapes

use std::time::{Duration, Instant};

/// One pending transition: a deadline armed from a reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTimer {
    armed_at: Instant,
    deadline: Instant,
}

impl StageTimer {
    pub fn new(armed_at: Instant, delay: Duration) -> Self {
        Self {
            armed_at,
            deadline: armed_at + delay,
        }
    }

    pub fn armed_at(&self) -> Instant {
        self.armed_at
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left before the deadline (zero once due)
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// Single slot holding at most one pending [`StageTimer`]
///
/// Arming always replaces (cancels) whatever was pending, so an owner can
/// never have two transitions scheduled at once. A due timer is released
/// from the slot by [`TimerSlot::take_due`] before its transition runs.
#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Option<StageTimer>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule a transition `delay` after `from`, cancelling any previous one
    pub fn arm(&mut self, from: Instant, delay: Duration) {
        self.pending = Some(StageTimer::new(from, delay));
    }

    /// Cancel the pending transition. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&StageTimer> {
        self.pending.as_ref()
    }

    /// If the pending timer is due at `now`, empty the slot and return its
    /// deadline (the instant the transition logically happened)
    pub fn take_due(&mut self, now: Instant) -> Option<Instant> {
        match self.pending {
            Some(timer) if timer.is_due(now) => {
                self.pending = None;
                Some(timer.deadline())
            }
            _ => None,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|timer| timer.remaining(now))
    }
}
