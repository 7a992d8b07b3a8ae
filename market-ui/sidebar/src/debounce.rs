use std::time::{Duration, Instant};

/// Trailing-edge debouncer driven by caller-supplied timestamps.
///
/// Every [`Debouncer::trigger`] restarts the window. [`Debouncer::poll`]
/// fires once the window has elapsed since the last trigger and reports how
/// many raw triggers were coalesced.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
    pending: usize,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
            pending: 0,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a raw trigger at `now` and restart the window.
    pub fn trigger(&mut self, now: Instant) {
        self.pending = self.pending.saturating_add(1);
        self.deadline = Some(now + self.window);
    }

    /// Fire if the window has closed, returning the coalesced trigger count.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(std::mem::take(&mut self.pending))
            },
            _ => None,
        }
    }

    /// Drop pending triggers without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.pending = 0;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Number of raw triggers waiting for the window to close.
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
