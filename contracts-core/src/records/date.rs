use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A plain day/month/year triple.
///
/// Ordering is lexicographic by (year, month, day). No calendar validation happens here;
/// callers that accept user input check that the date exists before building one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    // Field order drives the derived ordering.
    year: i32,
    month: u8,
    day: u8,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateError {
    #[error("'{0}' is not a date: expected DD.MM.YYYY")]
    InvalidFormat(String),
}

impl Date {
    pub fn new(day: u8, month: u8, year: i32) -> Self {
        Self { year, month, day }
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::new(1, 1, 2000)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{}", self.day, self.month, self.year)
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses `DD.MM.YYYY`. Only the shape is checked, not whether the day exists.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateError::InvalidFormat(s.to_string());

        let mut parts = s.trim().split('.');
        let day = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let month = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let year = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(day, month, year))
    }
}
