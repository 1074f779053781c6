use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use chrono::{Local, Timelike};

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Wall-clock time of day with minute precision.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[must_use]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const fn from_hm(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Capture the local wall clock, truncated to the minute.
    pub fn now() -> Self {
        let now = Local::now();
        Self::from_hm(now.hour() as u8, now.minute() as u8)
    }

    /// Total minutes since midnight.
    ///
    /// Out-of-range fields parsed from exotic announcements (`25:70`)
    /// contribute at face value until the first [`Self::add`] normalizes
    /// them.
    pub fn minutes_since_midnight(self) -> i32 {
        i32::from(self.hour) * 60 + i32::from(self.minute)
    }

    /// Add the signed number of minutes, wrapping around midnight.
    pub fn add(self, minutes: i32) -> Self {
        let total = (self.minutes_since_midnight() + minutes).rem_euclid(MINUTES_PER_DAY);
        Self::from_hm((total / 60) as u8, (total % 60) as u8)
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeFormatError;

    /// Accept exactly two digits, a colon, and two digits.
    ///
    /// The digit pairs are taken at face value: `25:70` parses fine and only
    /// gets normalized once arithmetic is applied to it.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.as_bytes() {
            &[hour_tens @ b'0'..=b'9', hour_ones @ b'0'..=b'9', b':', minute_tens @ b'0'..=b'9', minute_ones @ b'0'..=b'9'] => {
                Ok(Self::from_hm(
                    (hour_tens - b'0') * 10 + (hour_ones - b'0'),
                    (minute_tens - b'0') * 10 + (minute_ones - b'0'),
                ))
            }
            _ => Err(ClockTimeFormatError(text.to_string())),
        }
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Debug for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// The text does not match the `HH:MM` shape.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
#[error("`{0}` does not look like a `HH:MM` time")]
pub struct ClockTimeFormatError(String);
