use crate::calendar::date::JalaliDate;
use crate::error::CalendarError;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCell {
    /// Blank cell before the first or after the last day.
    Empty,
    /// Day of the month.
    Day(u32),
}

impl DayCell {
    /// Day of the month, if any.
    pub fn day(&self) -> Option<u32> {
        match self {
            DayCell::Empty => None,
            DayCell::Day(d) => Some(*d),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == DayCell::Empty
    }
}

/// One week, column 0 is Saturday and column 6 is Friday.
pub type Week = [DayCell; 7];

/// Layout of one month as a sequence of weeks.
///
/// Each week is one page for a paginated view. The first week has
/// blanks before day 1, the last week has blanks after the last day.
/// Friday is always the last column, so the first page ends with
/// [first_friday].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    /// 1 = Saturday .. 7 = Friday
    first_weekday: u32,
    month_length: u32,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Grid for the given month.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        let first = JalaliDate::new(year, month, 1)?;
        let month_length = first.month_length();
        let first_weekday = first.day_of_week();

        let offset = first_weekday - 1;
        let week_len = Self::calc_week_len(first_weekday, month_length);

        let mut weeks = vec![[DayCell::Empty; 7]; week_len];
        for day in 1..=month_length {
            let pos = (offset + day - 1) as usize;
            weeks[pos / 7][pos % 7] = DayCell::Day(day);
        }

        Ok(Self {
            year,
            month,
            first_weekday,
            month_length,
            weeks,
        })
    }

    /// Grid for the month of the given date.
    pub fn for_date(date: JalaliDate) -> Self {
        Self::new(date.year(), date.month()).expect("valid date")
    }

    /// Nr of weeks for the given month.
    pub fn count_weeks(year: i32, month: u32) -> Result<usize, CalendarError> {
        let first = JalaliDate::new(year, month, 1)?;
        Ok(Self::calc_week_len(first.day_of_week(), first.month_length()))
    }

    fn calc_week_len(first_weekday: u32, month_length: u32) -> usize {
        (first_weekday - 1 + month_length).div_ceil(7) as usize
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of the week of day 1. 1 = Saturday .. 7 = Friday.
    pub fn first_weekday(&self) -> u32 {
        self.first_weekday
    }

    pub fn month_length(&self) -> u32 {
        self.month_length
    }

    /// Nr of weeks.
    pub fn week_len(&self) -> usize {
        self.weeks.len()
    }

    /// All weeks in order. One week per page.
    pub fn pages(&self) -> &[Week] {
        &self.weeks
    }

    /// Page that contains the given day.
    pub fn page_of(&self, day: u32) -> Option<usize> {
        if day == 0 || day > self.month_length {
            return None;
        }
        Some(((self.first_weekday - 1 + day - 1) / 7) as usize)
    }

    /// Page containing the date, if the date is in this month.
    pub fn page_of_date(&self, date: JalaliDate) -> Option<usize> {
        if date.year() == self.year && date.month() == self.month {
            self.page_of(date.day())
        } else {
            None
        }
    }

    /// Date at the given page and column. None for blank cells.
    pub fn date_at(&self, page: usize, column: usize) -> Option<JalaliDate> {
        let day = self.weeks.get(page)?.get(column)?.day()?;
        JalaliDate::new(self.year, self.month, day).ok()
    }

    /// Iterate all days as `(page, column, day)`.
    pub fn days(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.weeks.iter().enumerate().flat_map(|(page, week)| {
            week.iter()
                .enumerate()
                .filter_map(move |(column, cell)| cell.day().map(|day| (page, column, day)))
        })
    }
}

/// Day of the month of the first Friday. This is the last cell
/// of the first page, and each following page ends 7 days later.
pub fn first_friday(year: i32, month: u32) -> Result<u32, CalendarError> {
    let first = JalaliDate::new(year, month, 1)?;
    Ok(8 - first.day_of_week())
}
