use std::time::{Duration, Instant};

/// One-shot debounce deadline.
///
/// The platform timer is only a wakeup; this struct is the authority on
/// whether a wakeup is the real quiet-period expiry or a stale event queued
/// before a restart. Taking `now` as a parameter keeps it testable with
/// explicit instants.
#[derive(Debug)]
pub struct Debouncer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// (Re)arm the deadline at `now + interval`.
    pub fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true if the quiet period has elapsed; disarms on fire.
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
