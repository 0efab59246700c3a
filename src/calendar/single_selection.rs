use crate::calendar::date::JalaliDate;
use crate::calendar::CalendarSelection;
use log::debug;

/// Can select a single date.
#[derive(Debug, Default, Clone)]
pub struct SingleSelection {
    selected: Option<JalaliDate>,
}

impl CalendarSelection for SingleSelection {
    fn count(&self) -> usize {
        if self.selected.is_some() {
            1
        } else {
            0
        }
    }

    fn is_selected(&self, date: JalaliDate) -> bool {
        self.selected == Some(date)
    }

    fn lead_selection(&self) -> Option<JalaliDate> {
        self.selected
    }
}

impl SingleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a selected date.
    pub fn with_selected(date: JalaliDate) -> Self {
        Self {
            selected: Some(date),
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Select a date. Returns true if the selection changed.
    pub fn select(&mut self, date: JalaliDate) -> bool {
        let old = self.selected;
        self.selected = Some(date);
        if old != self.selected {
            debug!("single selection {}", date);
        }
        old != self.selected
    }

    pub fn selected(&self) -> Option<JalaliDate> {
        self.selected
    }
}
