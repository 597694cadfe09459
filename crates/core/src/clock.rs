//! Wall-clock sources for case reference timestamps.

use crate::{Error, Result};
use chrono::{Local, NaiveDateTime};

/// Accepted layouts for fixed clock strings, most specific first.
const FIXED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Source of the local date and time used to build a case reference.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Parse `YYYY-MM-DDTHH:MM` (seconds optional, a space may replace `T`).
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        FIXED_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(Self)
            .ok_or_else(|| Error::InvalidTimestamp(value.to_string()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_minute_precision() {
        let clock = FixedClock::parse("2020-01-31T12:45").unwrap();
        let now = clock.now();
        assert_eq!((now.year(), now.month(), now.day()), (2020, 1, 31));
        assert_eq!((now.hour(), now.minute()), (12, 45));
    }

    #[test]
    fn parses_seconds_and_space_separator() {
        assert!(FixedClock::parse("2020-01-31T12:45:59").is_ok());
        assert!(FixedClock::parse("2020-01-31 12:45").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        let err = FixedClock::parse("yesterday").unwrap_err();
        assert!(matches!(err, Error::InvalidTimestamp(ref s) if s == "yesterday"));
    }
}
