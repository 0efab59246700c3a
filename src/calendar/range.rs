use crate::calendar::date::JalaliDate;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Position of a day relative to a selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DayKind {
    /// First day of the range.
    Start,
    /// Last day of the range.
    End,
    /// Strictly between start and end.
    Between,
    /// Not part of the range.
    None,
}

impl DayKind {
    /// Start, End or Between.
    pub fn is_selected(&self) -> bool {
        *self != DayKind::None
    }
}

/// Classify a day against a range. The range may be open-ended while
/// only the start is picked.
///
/// Start takes precedence if start and end are the same day.
pub fn classify(candidate: JalaliDate, start: JalaliDate, end: Option<JalaliDate>) -> DayKind {
    if candidate == start {
        DayKind::Start
    } else if let Some(end) = end {
        if candidate == end {
            DayKind::End
        } else if start < candidate && candidate < end {
            DayKind::Between
        } else {
            DayKind::None
        }
    } else {
        DayKind::None
    }
}

/// Sort two picked dates chronologically.
pub fn normalize_range(a: JalaliDate, b: JalaliDate) -> (JalaliDate, JalaliDate) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}
