#![doc = include_str!("../readme.md")]
//
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

pub mod calendar;
pub mod error;
pub mod format;
pub mod numerals;

pub use calendar::{JalaliDate, MonthGrid, MonthView};
pub use error::CalendarError;

mod _private {
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
