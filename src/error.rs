use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors of the calendar engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Month is outside 1..=12 or day exceeds the month length.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Year outside of [MIN_YEAR](crate::calendar::MIN_YEAR)..=[MAX_YEAR](crate::calendar::MAX_YEAR).
    ///
    /// This is also returned for gregorian dates that map to such a year,
    /// and for arithmetic that runs past the supported range.
    UnsupportedYear(i32),
    /// Text could not be parsed as a date.
    InvalidFormat(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarError::InvalidDate { year, month, day } => {
                write!(f, "invalid date {}/{}/{}", year, month, day)
            }
            CalendarError::InvalidMonth(month) => write!(f, "invalid month {}", month),
            CalendarError::UnsupportedYear(year) => write!(f, "unsupported year {}", year),
            CalendarError::InvalidFormat(text) => write!(f, "invalid date format {:?}", text),
        }
    }
}

impl Error for CalendarError {}
