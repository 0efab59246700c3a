use crate::calendar::date::JalaliDate;
use crate::calendar::range::{classify, normalize_range, DayKind};
use crate::calendar::CalendarSelection;
use log::debug;
use std::ops::RangeInclusive;

/// Can select a date range with two picks.
///
/// - The first pick sets the start.
/// - The second pick sets the end. If it is before the start
///   both are swapped.
/// - The next pick starts over.
///
/// Without range-mode every pick starts over, which gives a
/// single selection that still reports [DayKind::Start].
#[derive(Debug, Default, Clone)]
pub struct RangeSelection {
    start: Option<JalaliDate>,
    end: Option<JalaliDate>,
}

impl CalendarSelection for RangeSelection {
    fn count(&self) -> usize {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start.days_until(end).unsigned_abs() as usize + 1,
            (Some(_), None) => 1,
            (None, _) => 0,
        }
    }

    fn is_selected(&self, date: JalaliDate) -> bool {
        self.classify(date).is_selected()
    }

    fn lead_selection(&self) -> Option<JalaliDate> {
        self.end.or(self.start)
    }
}

impl RangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the given range. The dates are sorted.
    pub fn with_range(start: JalaliDate, end: Option<JalaliDate>) -> Self {
        let mut s = Self::default();
        s.select(start, end);
        s
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Pick a day.
    ///
    /// Returns true if the selection changed.
    pub fn pick(&mut self, date: JalaliDate, range_mode: bool) -> bool {
        let old = (self.start, self.end);

        match (self.start, self.end) {
            (Some(start), None) if range_mode => {
                let (start, end) = normalize_range(start, date);
                self.start = Some(start);
                self.end = Some(end);
            }
            _ => {
                self.start = Some(date);
                self.end = None;
            }
        }

        if old != (self.start, self.end) {
            debug!("range selection {:?} {:?}", self.start, self.end);
            true
        } else {
            false
        }
    }

    /// Set the range directly. The dates are sorted.
    pub fn select(&mut self, start: JalaliDate, end: Option<JalaliDate>) -> bool {
        let old = (self.start, self.end);
        match end {
            Some(end) => {
                let (start, end) = normalize_range(start, end);
                self.start = Some(start);
                self.end = Some(end);
            }
            None => {
                self.start = Some(start);
                self.end = None;
            }
        }
        old != (self.start, self.end)
    }

    pub fn start(&self) -> Option<JalaliDate> {
        self.start
    }

    pub fn end(&self) -> Option<JalaliDate> {
        self.end
    }

    /// Has both start and end.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Selection as (start, end) pair.
    pub fn selected(&self) -> Option<(JalaliDate, Option<JalaliDate>)> {
        self.start.map(|start| (start, self.end))
    }

    /// Selection as date-range. A lone start is a one-day range.
    pub fn selected_range(&self) -> Option<RangeInclusive<JalaliDate>> {
        let start = self.start?;
        Some(start..=self.end.unwrap_or(start))
    }

    /// Position of the date relative to the selection.
    pub fn classify(&self, date: JalaliDate) -> DayKind {
        match self.start {
            Some(start) => classify(date, start, self.end),
            None => DayKind::None,
        }
    }
}
