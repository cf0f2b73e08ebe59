//! Order-rate window
//!
//! Fixed one-second window: once at least a second has elapsed since the
//! window opened, the counter resets. Bursts spanning a window boundary can
//! briefly exceed the nominal rate; accepted trade-off for a single counter.

use std::time::Instant;

/// One-second order admission window
#[derive(Debug, Clone)]
pub struct RateWindow {
    window_start: Instant,
    count_in_window: u64,
}

impl RateWindow {
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            count_in_window: 0,
        }
    }

    /// Try to admit one order under the given per-second limit.
    ///
    /// A zero limit disables the check. The counter is incremented only when
    /// the order is admitted.
    pub fn try_admit(&mut self, limit: u64) -> bool {
        if limit == 0 {
            return true;
        }

        if self.window_start.elapsed().as_secs() >= 1 {
            self.count_in_window = 0;
            self.window_start = Instant::now();
        }

        if self.count_in_window >= limit {
            return false;
        }

        self.count_in_window += 1;
        true
    }

    /// Reopen the window and zero the counter
    pub fn reset(&mut self) {
        self.count_in_window = 0;
        self.window_start = Instant::now();
    }
}

impl Default for RateWindow {
    fn default() -> Self {
        Self::new()
    }
}
