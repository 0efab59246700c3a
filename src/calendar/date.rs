use crate::calendar::convert;
use crate::calendar::names::{MONTH_NAMES, WEEKDAY_NAMES};
use crate::error::CalendarError;
use crate::numerals;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A valid date of the jalali calendar.
///
/// Can only be constructed for valid dates, so every value has a
/// gregorian equivalent. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i32, u32, u32)", into = "(i32, u32, u32)"))]
pub struct JalaliDate {
    // field order gives the derived ordering.
    year: i32,
    month: u32,
    day: u32,
}

impl JalaliDate {
    /// New date. Fails for month outside 1..=12, day outside the month
    /// and years outside the supported range.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let len = match convert::month_length(year, month) {
            Ok(len) => len,
            Err(CalendarError::InvalidMonth(_)) => {
                return Err(CalendarError::InvalidDate { year, month, day })
            }
            Err(e) => return Err(e),
        };
        if day == 0 || day > len {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Current date of the local timezone.
    pub fn today() -> Result<Self, CalendarError> {
        Self::from_gregorian(Local::now().date_naive())
    }

    /// Convert from a gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        let (year, month, day) = convert::from_gregorian(date)?;
        Ok(Self { year, month, day })
    }

    /// Convert to the gregorian date.
    pub fn to_gregorian(&self) -> NaiveDate {
        convert::to_gregorian(self.year, self.month, self.day).expect("valid date")
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month 1..=12
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of the month, 1 based.
    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Day of the year, 1 based.
    pub fn ordinal(&self) -> u32 {
        convert::ordinal(self.month, self.day)
    }

    pub fn is_leap_year(&self) -> bool {
        convert::is_leap_year(self.year).expect("valid year")
    }

    /// Length of this month.
    pub fn month_length(&self) -> u32 {
        convert::month_length(self.year, self.month).expect("valid date")
    }

    /// Day of the week, 1 is Saturday and 7 is Friday.
    pub fn day_of_week(&self) -> u32 {
        (self.weekday().num_days_from_sunday() + 1) % 7 + 1
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.to_gregorian().weekday()
    }

    /// Persian month name.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    /// Persian weekday name.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.day_of_week() as usize - 1]
    }

    /// First day of this month.
    pub fn first_day_of_month(&self) -> Self {
        Self { day: 1, ..*self }
    }

    /// Last day of this month.
    pub fn last_day_of_month(&self) -> Self {
        Self {
            day: self.month_length(),
            ..*self
        }
    }

    pub fn is_first_day_of_month(&self) -> bool {
        self.day == 1
    }

    pub fn is_last_day_of_month(&self) -> bool {
        self.day == self.month_length()
    }

    /// Same year and month.
    pub fn is_same_month(&self, other: JalaliDate) -> bool {
        self.year == other.year && self.month == other.month
    }

    /// Next day.
    pub fn next_day(&self) -> Result<Self, CalendarError> {
        if self.day < self.month_length() {
            Ok(Self {
                day: self.day + 1,
                ..*self
            })
        } else if self.month < 12 {
            Ok(Self {
                month: self.month + 1,
                day: 1,
                ..*self
            })
        } else {
            Self::new(self.year + 1, 1, 1)
        }
    }

    /// Previous day.
    pub fn prev_day(&self) -> Result<Self, CalendarError> {
        if self.day > 1 {
            Ok(Self {
                day: self.day - 1,
                ..*self
            })
        } else if self.month > 1 {
            let month = self.month - 1;
            let day = convert::month_length(self.year, month)?;
            Ok(Self { month, day, ..*self })
        } else {
            let year = self.year - 1;
            Self::new(year, 12, convert::month_length(year, 12)?)
        }
    }

    /// Alias for [next_day](Self::next_day).
    #[inline]
    pub fn tomorrow(&self) -> Result<Self, CalendarError> {
        self.next_day()
    }

    /// Alias for [prev_day](Self::prev_day).
    #[inline]
    pub fn yesterday(&self) -> Result<Self, CalendarError> {
        self.prev_day()
    }

    /// Add or subtract a number of days. Uses the gregorian calendar.
    ///
    /// If the result is out of reach for chrono the error reports
    /// the year of self.
    pub fn add_days(&self, n: i64) -> Result<Self, CalendarError> {
        let date = self.to_gregorian();
        let date = if n >= 0 {
            date.checked_add_days(Days::new(n as u64))
        } else {
            date.checked_sub_days(Days::new(n.unsigned_abs()))
        };
        match date {
            Some(date) => Self::from_gregorian(date),
            None => Err(CalendarError::UnsupportedYear(self.year)),
        }
    }

    /// Signed number of days from self to other.
    pub fn days_until(&self, other: JalaliDate) -> i64 {
        (other.to_gregorian() - self.to_gregorian()).num_days()
    }

    /// Add or subtract whole months.
    ///
    /// The day is kept, but clamped to the length of the new month.
    pub fn add_months(&self, n: i32) -> Result<Self, CalendarError> {
        let (year, month) = shift_month(self.year, self.month, n)?;
        let day = self.day.min(convert::month_length(year, month)?);
        Ok(Self { year, month, day })
    }

    /// Add or subtract whole months and go to the first of that month.
    pub fn add_months_first_day(&self, n: i32) -> Result<Self, CalendarError> {
        let (year, month) = shift_month(self.year, self.month, n)?;
        Self::new(year, month, 1)
    }

    /// Add or subtract whole years.
    ///
    /// The 30th of Esfand is clamped to the 29th for a common year.
    pub fn add_years(&self, n: i32) -> Result<Self, CalendarError> {
        let year = self
            .year
            .checked_add(n)
            .ok_or(CalendarError::UnsupportedYear(self.year))?;
        let day = self.day.min(convert::month_length(year, self.month)?);
        Ok(Self {
            year,
            month: self.month,
            day,
        })
    }
}

fn shift_month(year: i32, month: u32, n: i32) -> Result<(i32, u32), CalendarError> {
    let total = year as i64 * 12 + (month as i64 - 1) + n as i64;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let year = i32::try_from(year).map_err(|_| CalendarError::UnsupportedYear(i32::MAX))?;
    if !(convert::MIN_YEAR..=convert::MAX_YEAR).contains(&year) {
        return Err(CalendarError::UnsupportedYear(year));
    }
    Ok((year, month))
}

impl From<JalaliDate> for NaiveDate {
    fn from(value: JalaliDate) -> Self {
        value.to_gregorian()
    }
}

impl TryFrom<NaiveDate> for JalaliDate {
    type Error = CalendarError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        JalaliDate::from_gregorian(value)
    }
}

impl TryFrom<(i32, u32, u32)> for JalaliDate {
    type Error = CalendarError;

    fn try_from(value: (i32, u32, u32)) -> Result<Self, Self::Error> {
        JalaliDate::new(value.0, value.1, value.2)
    }
}

impl From<JalaliDate> for (i32, u32, u32) {
    fn from(value: JalaliDate) -> Self {
        (value.year, value.month, value.day)
    }
}

impl Display for JalaliDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for JalaliDate {
    type Err = CalendarError;

    /// Parses `year/month/day` or `year-month-day`.
    /// Digits may be latin, persian or arabic-indic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let latin = numerals::to_latin(s.trim());
        let mut parts = latin.split(['/', '-']);

        let invalid = || CalendarError::InvalidFormat(s.to_string());
        let mut next = || parts.next().ok_or_else(invalid);
        let year = next()?.parse::<i32>().map_err(|_| invalid())?;
        let month = next()?.parse::<u32>().map_err(|_| invalid())?;
        let day = next()?.parse::<u32>().map_err(|_| invalid())?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        JalaliDate::new(year, month, day)
    }
}
