//! Clock time model.
//!
//! Shift start and end times are stored as four-digit 24 hour strings
//! (`"0900"`, `"2230"`). [`ClockTime`] validates that shape once, when the
//! record is loaded, and writes the same string back out.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A time of day in `HHMM` form, with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parses a four-digit `HHMM` string.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::ClockTime;
    ///
    /// let time = ClockTime::parse("1330").unwrap();
    /// assert_eq!(time.minutes_since_midnight(), 810);
    /// assert!(ClockTime::parse("2400").is_err());
    /// assert!(ClockTime::parse("930").is_err());
    /// ```
    pub fn parse(value: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidTime {
            value: value.to_string(),
        };

        if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        NaiveTime::parse_from_str(value, "%H%M")
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Builds a clock time from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Returns the number of minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.0.hour(), self.0.minute())
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}
