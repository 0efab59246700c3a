//!
//! Leap-cycle table and the anchor of all conversions.
//!
//! The 33-year cycle is not perfectly regular over the whole
//! calendar. The break years below delimit runs of regular cycles;
//! inside a run the leap years fall on fixed remainders. For
//! 1178..=1633 this is exactly `year % 33 in [1, 5, 9, 13, 17, 22, 26, 30]`.
//!

use crate::error::CalendarError;
use chrono::{Datelike, Days, NaiveDate};
use log::debug;

/// First supported year.
pub const MIN_YEAR: i32 = 1;
/// Last supported year.
pub const MAX_YEAR: i32 = 3177;

const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Difference between jalali and gregorian year numbering at Nowruz.
pub(crate) const GREGORIAN_OFFSET: i32 = 621;

/// Days before month 7, six months with 31 days.
pub(crate) const FIRST_HALF: u32 = 186;

/// Result of one pass over the break table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LeapInfo {
    /// Position in the 4-year sub cycle, 0 is a leap year.
    leap: i32,
    /// Day in gregorian March of 1 Farvardin.
    march: u32,
}

fn leap_info(year: i32) -> Result<LeapInfo, CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        debug!("leap table: unsupported year {}", year);
        return Err(CalendarError::UnsupportedYear(year));
    }

    let gy = year + GREGORIAN_OFFSET;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;
    for jm in BREAKS.iter().skip(1).copied() {
        jump = jm - jp;
        if year < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = year - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // leap days of the gregorian calendar up to gy
    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    // truncating remainder, the -1 case maps to the end of the sub cycle.
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(LeapInfo {
        leap,
        march: march as u32,
    })
}

/// Is this a leap year? Esfand has 30 days in a leap year.
pub fn is_leap_year(year: i32) -> Result<bool, CalendarError> {
    Ok(leap_info(year)?.leap == 0)
}

/// Number of days in the month.
///
/// 31 for the first six months, 30 for months 7 to 11 and
/// 29 or 30 for Esfand.
pub fn month_length(year: i32, month: u32) -> Result<u32, CalendarError> {
    match month {
        1..=6 => {
            check_year(year)?;
            Ok(31)
        }
        7..=11 => {
            check_year(year)?;
            Ok(30)
        }
        12 => {
            if is_leap_year(year)? {
                Ok(30)
            } else {
                Ok(29)
            }
        }
        _ => Err(CalendarError::InvalidMonth(month)),
    }
}

/// Number of days in the year.
pub fn year_length(year: i32) -> Result<u32, CalendarError> {
    if is_leap_year(year)? {
        Ok(366)
    } else {
        Ok(365)
    }
}

/// Gregorian date of 1 Farvardin of the given year.
pub fn nowruz(year: i32) -> Result<NaiveDate, CalendarError> {
    let info = leap_info(year)?;
    NaiveDate::from_ymd_opt(year + GREGORIAN_OFFSET, 3, info.march)
        .ok_or(CalendarError::UnsupportedYear(year))
}

/// Day of the year, 1 based. Doesn't validate.
pub(crate) fn ordinal(month: u32, day: u32) -> u32 {
    if month <= 7 {
        (month - 1) * 31 + day
    } else {
        FIRST_HALF + (month - 7) * 30 + day
    }
}

/// Month and day from the 0-based day of the year. Doesn't validate.
pub(crate) fn month_day(day0: u32) -> (u32, u32) {
    if day0 < FIRST_HALF {
        (day0 / 31 + 1, day0 % 31 + 1)
    } else {
        let k = day0 - FIRST_HALF;
        (k / 30 + 7, k % 30 + 1)
    }
}

/// Gregorian date for valid jalali fields.
pub(crate) fn to_gregorian(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    let start = nowruz(year)?;
    start
        .checked_add_days(Days::new(ordinal(month, day) as u64 - 1))
        .ok_or(CalendarError::UnsupportedYear(year))
}

/// Jalali fields for a gregorian date.
pub(crate) fn from_gregorian(date: NaiveDate) -> Result<(i32, u32, u32), CalendarError> {
    // A year beyond MAX_YEAR can still be the tail of MAX_YEAR.
    let mut year = (date.year() - GREGORIAN_OFFSET).min(MAX_YEAR);
    let mut start = nowruz(year)?;
    if date < start {
        year -= 1;
        start = nowruz(year)?;
    }

    let day0 = (date - start).num_days();
    if day0 >= year_length(year)? as i64 {
        debug!("leap table: {} is past year {}", date, MAX_YEAR);
        return Err(CalendarError::UnsupportedYear(year + 1));
    }

    let (month, day) = month_day(day0 as u32);
    Ok((year, month, day))
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::UnsupportedYear(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(nowruz(1), Ok(NaiveDate::from_ymd_opt(622, 3, 22).unwrap()));
        assert_eq!(
            nowruz(1403),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
        );
        assert_eq!(
            nowruz(1404),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 21).unwrap())
        );
    }

    #[test]
    fn test_leap_remainders() {
        for year in 1178..=1633 {
            let expect = matches!(year % 33, 1 | 5 | 9 | 13 | 17 | 22 | 26 | 30);
            assert_eq!(is_leap_year(year), Ok(expect), "year {}", year);
        }
    }

    #[test]
    fn test_leap_matches_year_length() {
        for year in MIN_YEAR..MAX_YEAR {
            let len = (nowruz(year + 1).unwrap() - nowruz(year).unwrap()).num_days();
            assert_eq!(is_leap_year(year).unwrap(), len == 366, "year {}", year);
        }
    }

    #[test]
    fn test_range() {
        assert_eq!(is_leap_year(0), Err(CalendarError::UnsupportedYear(0)));
        assert_eq!(
            is_leap_year(MAX_YEAR + 1),
            Err(CalendarError::UnsupportedYear(MAX_YEAR + 1))
        );
        assert_eq!(month_length(-5, 1), Err(CalendarError::UnsupportedYear(-5)));
        assert_eq!(month_length(1403, 13), Err(CalendarError::InvalidMonth(13)));
        assert_eq!(month_length(1403, 0), Err(CalendarError::InvalidMonth(0)));
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1, 1), 1);
        assert_eq!(ordinal(6, 31), 186);
        assert_eq!(ordinal(7, 1), 187);
        assert_eq!(ordinal(12, 30), 366);
        for day0 in 0..366 {
            let (m, d) = month_day(day0);
            assert_eq!(ordinal(m, d), day0 + 1);
        }
    }
}
