//! Call-site debouncing for search-as-you-type.
//!
//! The engine recomputes synchronously on every call; a UI that re-filters on
//! each keystroke wraps its queries in a [`Debouncer`] and only runs the
//! latest one once input has been quiet for the configured delay. Time is
//! passed in explicitly, so the debouncer holds no timers and never sleeps.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value and restarts the quiet period at `now`.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Takes the pending value if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|p| now >= p.deadline);
        if ready {
            self.flush()
        } else {
            None
        }
    }

    /// Time left before the pending value becomes ready, if any is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }

    /// Takes the pending value regardless of the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
