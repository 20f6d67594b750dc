//! Calendar-day source for the daily message rotation.
//!
//! "Today" is the UTC calendar date, so the daily message rolls over at UTC
//! midnight rather than at the viewer's local midnight.

use chrono::{NaiveDate, Utc};
use parking_lot::Mutex;

/// Provides the current calendar day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Format a day the way it is persisted (`YYYY-MM-DD`).
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Wall clock, UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a settable day.
#[derive(Debug)]
pub struct FixedClock {
    day: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(day: NaiveDate) -> Self {
        Self {
            day: Mutex::new(day),
        }
    }

    /// Parse a `YYYY-MM-DD` string.
    ///
    /// # Panics
    ///
    /// Panics if `day` is not a valid date; intended for test fixtures.
    pub fn at(day: &str) -> Self {
        let parsed = NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .unwrap_or_else(|e| panic!("invalid fixture date {day:?}: {e}"));
        Self::new(parsed)
    }

    pub fn set(&self, day: NaiveDate) {
        *self.day.lock() = day;
    }

    /// Move forward by `days` calendar days.
    pub fn advance_days(&self, days: u64) {
        let mut day = self.day.lock();
        *day = *day + chrono::Days::new(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.day.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_key_format() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(date_key(day), "2024-05-01");
    }

    #[test]
    fn test_fixed_clock_advance() {
        let clock = FixedClock::at("2024-12-31");
        clock.advance_days(1);
        assert_eq!(date_key(clock.today()), "2025-01-01");
    }

    #[test]
    fn test_system_clock_matches_utc() {
        let before = Utc::now().date_naive();
        let today = SystemClock.today();
        let after = Utc::now().date_naive();
        assert!(today == before || today == after);
    }
}
