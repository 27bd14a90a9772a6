//! # Ticker
//!
//! Fixed-cadence scheduling for the event loop. The loop asks the ticker how
//! long it may block waiting for input, then polls it to learn whether a tick
//! is due. Missed ticks coalesce into one; there is no catch-up burst.

use std::time::{Duration, Instant};

pub const MIN_TICK_RATE_HZ: u32 = 1;
pub const MAX_TICK_RATE_HZ: u32 = 240;

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    /// First tick is due at `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next: now,
        }
    }

    /// Ticker firing `hz` times per second, clamped to the supported range.
    pub fn from_rate(hz: u32, now: Instant) -> Self {
        let hz = hz.clamp(MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ);
        Self::new(Duration::from_secs(1) / hz, now)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick is due (zero if overdue).
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Returns `true` and schedules the following tick if one is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }
        true
    }
}
