//! Injected "today" provider.
//!
//! Relative filters ("today", "tomorrow", weekend math) and section labels
//! all key off the same calendar day, supplied through this trait rather
//! than read from the system clock inside the engine.

use chrono::{NaiveDate, Utc};

/// Supplies the current calendar day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock day in the UTC calendar, matching the calendar used for all
/// same-day comparisons in the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to a fixed day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_day() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 6).unwrap();
        assert_eq!(FixedClock(day).today(), day);
    }
}
