use crate::calendar::date::JalaliDate;
use crate::calendar::month::MonthGrid;
use crate::error::CalendarError;

/// The month currently shown by a picker.
///
/// This is a plain value. Navigation returns a new value and leaves
/// the old one alone, the owner decides whether to keep it. A failed
/// navigation (past the supported years) can simply be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthView {
    /// Always the first of the month.
    start_date: JalaliDate,
}

impl MonthView {
    /// View of the month containing the date.
    pub fn new(date: JalaliDate) -> Self {
        Self {
            start_date: date.first_day_of_month(),
        }
    }

    /// View of the current month.
    pub fn today() -> Result<Self, CalendarError> {
        Ok(Self::new(JalaliDate::today()?))
    }

    /// Start date of this month. Will always be the first.
    pub fn start_date(&self) -> JalaliDate {
        self.start_date
    }

    /// End date of this month.
    pub fn end_date(&self) -> JalaliDate {
        self.start_date.last_day_of_month()
    }

    pub fn year(&self) -> i32 {
        self.start_date.year()
    }

    pub fn month(&self) -> u32 {
        self.start_date.month()
    }

    /// Is the date part of this month.
    pub fn contains(&self, date: JalaliDate) -> bool {
        self.start_date.is_same_month(date)
    }

    /// Is today part of this month.
    pub fn contains_today(&self) -> bool {
        JalaliDate::today()
            .map(|today| self.contains(today))
            .unwrap_or(false)
    }

    /// Grid of this month.
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::for_date(self.start_date)
    }

    pub fn next_month(&self) -> Result<Self, CalendarError> {
        self.move_months(1)
    }

    pub fn prev_month(&self) -> Result<Self, CalendarError> {
        self.move_months(-1)
    }

    /// Move n months forward or backward.
    pub fn move_months(&self, n: i32) -> Result<Self, CalendarError> {
        Ok(Self {
            start_date: self.start_date.add_months_first_day(n)?,
        })
    }

    /// Same year, other month.
    pub fn with_month(&self, month: u32) -> Result<Self, CalendarError> {
        Ok(Self {
            start_date: JalaliDate::new(self.year(), month, 1)?,
        })
    }

    /// Same month, other year.
    pub fn with_year(&self, year: i32) -> Result<Self, CalendarError> {
        Ok(Self {
            start_date: JalaliDate::new(year, self.month(), 1)?,
        })
    }
}

impl From<JalaliDate> for MonthView {
    fn from(value: JalaliDate) -> Self {
        Self::new(value)
    }
}
