//! Short color transition window started by a mode toggle.

use std::time::{Duration, Instant};

/// A one-shot transition window. Expiry needs no callback: once `duration`
/// has elapsed the window simply reports itself inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTransition {
    started: Instant,
    duration: Duration,
}

impl ThemeTransition {
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started: now,
            duration,
        }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < self.duration
    }

    /// Fraction of the window elapsed at `now`, or `None` once it is over.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        if !self.is_active(now) {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started);
        Some(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }
}
