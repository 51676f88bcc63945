// SPDX-License-Identifier: MPL-2.0
//! Deadline-based timers driven by the dispatch loop.
//!
//! Timers never spawn anything. They only remember a deadline; the owner
//! asks whether it is due when the loop wakes up. Rescheduling always
//! replaces the previous deadline, so at most one firing is pending.

use std::time::{Duration, Instant};

/// Fires once at a deadline, unless canceled first.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneShotTimer {
    deadline: Option<Instant>,
}

impl OneShotTimer {
    /// Schedules a firing at `at`, replacing any pending one.
    pub fn schedule(&mut self, at: Instant) {
        self.deadline = Some(at);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Disarms and returns true if the deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if at <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Fires immediately on start and then every period until stopped.
#[derive(Debug, Clone, Copy)]
pub struct RepeatingTimer {
    period: Duration,
    next: Option<Instant>,
}

impl RepeatingTimer {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Starts the timer with a first firing due at `now`.
    ///
    /// Returns false if it was already running; the schedule is kept.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.next = Some(now);
        true
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns true if a firing is due and schedules the next one.
    ///
    /// Missed periods coalesce: the next firing is one period after `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.next {
            Some(at) if at <= now => {
                self.next = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}
