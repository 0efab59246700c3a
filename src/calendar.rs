//!
//! Jalali calendar.
//!
//! [JalaliDate] is the value type, everything else is computed from
//! it on demand. [MonthGrid] lays out one month as weeks from Saturday
//! to Friday, [MonthView] is the month a picker currently shows and
//! the selection models track what the user picked.
//!
//! There is no widget here, rendering is up to the user.
//!

mod convert;
mod date;
mod month;
pub mod names;
mod range;
mod range_selection;
mod single_selection;
mod view;

pub use convert::{is_leap_year, month_length, nowruz, year_length, MAX_YEAR, MIN_YEAR};
pub use date::*;
pub use month::*;
pub use range::*;
pub use view::*;

/// Selection model for a calendar.
pub trait CalendarSelection {
    /// Number of selected days.
    fn count(&self) -> usize;

    /// Is the given day selected.
    fn is_selected(&self, date: JalaliDate) -> bool;

    /// Selection lead, or the sole selected day.
    fn lead_selection(&self) -> Option<JalaliDate>;
}

pub mod selection {
    use crate::calendar::{CalendarSelection, JalaliDate};
    use std::cell::RefCell;
    use std::rc::Rc;

    pub use super::range_selection::*;
    pub use super::single_selection::*;

    impl<T: CalendarSelection> CalendarSelection for Rc<RefCell<T>> {
        fn count(&self) -> usize {
            self.borrow().count()
        }

        fn is_selected(&self, date: JalaliDate) -> bool {
            self.borrow().is_selected(date)
        }

        fn lead_selection(&self) -> Option<JalaliDate> {
            self.borrow().lead_selection()
        }
    }
}
