//! Drop clock - the single repeating timer behind gravity.
//!
//! The clock is fed elapsed milliseconds instead of reading a wall clock, so
//! the same code drives the terminal host, the tokio session and tests.

/// Repeating timer that fires once per `interval_ms` while running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropClock {
    interval_ms: u32,
    elapsed_ms: u32,
    running: bool,
}

impl DropClock {
    pub fn new(interval_ms: u32, running: bool) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            running,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Tear the timer down and start a fresh one; the next tick is a full
    /// `interval_ms` away.
    pub fn restart(&mut self, interval_ms: u32, running: bool) {
        self.interval_ms = interval_ms.max(1);
        self.elapsed_ms = 0;
        self.running = running;
    }

    /// Feed elapsed time. Returns true when a tick is due.
    ///
    /// Only one tick is reported per call; time past the deadline is kept, so
    /// callers drain backlog with `advance(0)`.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }

    /// Milliseconds until the next tick, `None` while stopped
    pub fn remaining_ms(&self) -> Option<u32> {
        self.running
            .then(|| self.interval_ms.saturating_sub(self.elapsed_ms))
    }
}
