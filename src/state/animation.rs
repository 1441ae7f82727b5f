use std::time::{Duration, Instant};

use crate::geometry::lerp;

/// Linear progress animation between two values over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressAnimation {
    from: f64,
    to: f64,
    started_at: Instant,
    duration: Duration,
    notify_on_end: bool,
}

impl ProgressAnimation {
    pub fn new(from: f64, to: f64, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            notify_on_end: false,
        }
    }

    /// Marks the animation as one whose end must be reported to the listener.
    pub fn notifying(mut self) -> Self {
        self.notify_on_end = true;
        self
    }

    pub fn notify_on_end(&self) -> bool {
        self.notify_on_end
    }

    pub fn fraction_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        let fraction = self.fraction_at(now);
        if fraction >= 1.0 {
            return self.to;
        }
        lerp(self.from, self.to, fraction)
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.fraction_at(now) >= 1.0
    }
}
