//! Wall-clock access for the daily shuffle seed.
//!
//! The mosaic order is a pure function of the day: `floor(unix_millis /
//! 86_400_000)`. Time is read through [`Clock`] so tests and the CLI's
//! `--date` flag can pin it.

use chrono::{NaiveDate, Utc};

/// Milliseconds in one day; the seed changes once per this interval.
pub const DAY_MILLIS: i64 = 86_400_000;

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl FixedClock {
    /// Midnight UTC at the start of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        let millis = date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default();
        Self(millis)
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Day number since the epoch, floored (so pre-1970 instants stay negative).
pub fn daily_seed(millis: i64) -> i64 {
    millis.div_euclid(DAY_MILLIS)
}

pub fn seed_from_clock(clock: &impl Clock) -> i64 {
    daily_seed(clock.now_millis())
}
