use std::time::{Duration, Instant};

/// A monotonic clock, reporting time elapsed since some fixed start point.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// the host's real clock
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}
