//! Search debouncing
//!
//! Holds at most one pending search. Scheduling again replaces it and
//! pushes the deadline out, so a burst of keystrokes yields one search for
//! the final text.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSearch {
    query: String,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<PendingSearch>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Arm a search for `query`, replacing any pending one
    pub fn schedule(&mut self, query: impl Into<String>) {
        self.schedule_at(query, Instant::now());
    }

    pub fn schedule_at(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some(PendingSearch {
            query: query.into(),
            deadline: now + self.delay,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending query once its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }

    /// Take the pending query immediately, ignoring the deadline
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.query)
    }

    /// Time left before the pending search fires, zero if overdue
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }
}
