//!
//! Formatting options for dates.
//!

use crate::_private::NonExhaustive;
use crate::calendar::names::{MONTH_NAMES, MONTH_NAMES_LATIN};
use crate::calendar::JalaliDate;
use crate::numerals::Numerals;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use std::fmt::Write;

/// How the month is written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MonthStyle {
    /// `year/month/day`
    #[default]
    Number,
    /// `day monthname year` with the persian month name.
    Persian,
    /// `day monthname year` with the transliterated month name.
    Latin,
}

/// Date formatting.
///
/// Default gives `1403/01/05`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DateFormat {
    /// Digits.
    pub numerals: Numerals,
    /// Month as number or name.
    pub month: MonthStyle,
    /// Separator for the numeric form.
    pub separator: char,
    /// Pad month and day to two digits in the numeric form.
    pub zero_pad: bool,
    /// Prefix the persian weekday name.
    pub weekday: bool,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub non_exhaustive: NonExhaustive,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            numerals: Default::default(),
            month: Default::default(),
            separator: '/',
            zero_pad: true,
            weekday: false,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl DateFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persian digits and month names: `۵ فروردین ۱۴۰۳`
    pub fn persian() -> Self {
        Self {
            numerals: Numerals::Persian,
            month: MonthStyle::Persian,
            ..Self::default()
        }
    }

    #[inline]
    pub fn numerals(mut self, numerals: Numerals) -> Self {
        self.numerals = numerals;
        self
    }

    #[inline]
    pub fn month(mut self, month: MonthStyle) -> Self {
        self.month = month;
        self
    }

    #[inline]
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    #[inline]
    pub fn zero_pad(mut self, zero_pad: bool) -> Self {
        self.zero_pad = zero_pad;
        self
    }

    #[inline]
    pub fn weekday(mut self, weekday: bool) -> Self {
        self.weekday = weekday;
        self
    }

    /// Format the date.
    pub fn format(&self, date: &JalaliDate) -> String {
        let mut buf = String::new();
        if self.weekday {
            buf.push_str(date.weekday_name());
            buf.push(' ');
        }

        let month_names = match self.month {
            MonthStyle::Number => None,
            MonthStyle::Persian => Some(&MONTH_NAMES),
            MonthStyle::Latin => Some(&MONTH_NAMES_LATIN),
        };

        // writing to a String doesn't fail.
        _ = match month_names {
            None if self.zero_pad => write!(
                buf,
                "{:04}{sep}{:02}{sep}{:02}",
                date.year(),
                date.month(),
                date.day(),
                sep = self.separator
            ),
            None => write!(
                buf,
                "{}{sep}{}{sep}{}",
                date.year(),
                date.month(),
                date.day(),
                sep = self.separator
            ),
            Some(names) => write!(
                buf,
                "{} {} {}",
                date.day(),
                names[date.month() as usize - 1],
                date.year()
            ),
        };

        self.numerals.apply(&buf)
    }

    /// Format just a number, for the day cells of a grid.
    pub fn format_number(&self, n: impl Into<i64>) -> String {
        self.numerals.apply(&n.into().to_string())
    }
}
