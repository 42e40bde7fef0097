use std::time::{Duration, Instant};

/// Playback position copied out of the audio service at poll time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    pub elapsed: Duration,
    pub total: Option<Duration>,
}

impl ProgressSnapshot {
    /// Fraction of the track played, in `0.0..=1.0`. Zero when the length is unknown.
    pub fn ratio(&self) -> f64 {
        match self.total {
            Some(total) if !total.is_zero() => {
                (self.elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}

/// Fixed-interval schedule for progress polling inside the event loop.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// `true` on the first call after a reset, then once per interval.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
