// Day cell module
// One slot of the month grid produced by the calendar-math helper

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// A concrete calendar day. `month` is zero-based (0 = January) to match the
/// month convention of the widget's props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }

    /// The date at local midnight, used as an all-day event boundary
    pub fn to_midnight(self) -> Option<NaiveDateTime> {
        self.to_naive_date()?.and_hms_opt(0, 0, 0)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }
}

/// A slot in the displayed month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Padding with no date attached
    Blank,
    /// Padding that falls on a day of the previous or next month
    Sibling(CalendarDate),
    /// A day of the displayed month
    Day(CalendarDate),
}

impl DayCell {
    /// True for any slot that does not belong to the displayed month
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, DayCell::Day(_))
    }

    /// The selectable date of this slot, if it has one
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            DayCell::Day(date) => Some(*date),
            DayCell::Blank | DayCell::Sibling(_) => None,
        }
    }

    /// Day-of-month label shown in the grid; placeholders stay empty
    pub fn label(&self) -> String {
        self.date().map(|d| d.day.to_string()).unwrap_or_default()
    }
}
