//! Fixed-interval timers driven by elapsed wall time.
//!
//! A [`FixedTimer`] turns irregular frame deltas into a whole number of
//! fixed-length fires. The caller decides what a fire means (a physics step,
//! a pipe spawn). Feeding the same deltas always yields the same fires, so a
//! test can replay a session exactly.

use super::constants::MAX_FRAME_DT_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTimer {
    interval_ms: u64,
    accumulated_ms: u64,
    armed: bool,
}

impl FixedTimer {
    /// Create a halted timer. `interval_ms` is raised to at least 1.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            armed: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start counting from zero.
    pub fn arm(&mut self) {
        self.armed = true;
        self.accumulated_ms = 0;
    }

    /// Stop the timer and drop any partial interval.
    pub fn halt(&mut self) {
        self.armed = false;
        self.accumulated_ms = 0;
    }

    /// Add elapsed time and return how many intervals completed.
    ///
    /// `dt_ms` is clamped to [`MAX_FRAME_DT_MS`]. A halted timer never fires.
    pub fn advance(&mut self, dt_ms: u64) -> u32 {
        if !self.armed {
            return 0;
        }

        self.accumulated_ms += dt_ms.min(MAX_FRAME_DT_MS);
        let mut fires = 0;
        while self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms -= self.interval_ms;
            fires += 1;
        }
        fires
    }

    /// Milliseconds until the next fire.
    pub fn remaining_ms(&self) -> u64 {
        self.interval_ms.saturating_sub(self.accumulated_ms)
    }
}
