use std::time::{Duration, Instant};

pub const REDRAW_INTERVAL: Duration = Duration::from_millis(1000);

/// Fires once per elapsed interval, whether or not anything changed.
#[derive(Debug, Clone)]
pub struct RedrawTicker {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl Default for RedrawTicker {
    fn default() -> Self {
        Self::new(REDRAW_INTERVAL)
    }
}

impl RedrawTicker {
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "redraw interval must be positive");

        Self {
            interval,
            last_tick: None,
        }
    }

    /// Returns true when a tick is due and starts the next interval.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = match self.last_tick {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };

        if due {
            self.last_tick = Some(now);
        }

        due
    }

    pub fn until_next(&self, now: Instant) -> Duration {
        match self.last_tick {
            None => Duration::ZERO,
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
        }
    }
}
