// Test fixtures - reusable test data
// Provides consistent hosts and dates across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use month_calendar::models::event::CalendarEvent;
use month_calendar::services::id::SequentialIdGenerator;
use month_calendar::ui_egui::{CalendarHost, MonthCalendar, MonthCalendarProps};

/// Host that records every callback it receives
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub added: Vec<CalendarEvent>,
    pub removed: Vec<CalendarEvent>,
}

impl CalendarHost for RecordingHost {
    fn add_event(&mut self, event: CalendarEvent) {
        self.added.push(event);
    }

    fn remove_event(&mut self, event: &CalendarEvent) {
        self.removed.push(event.clone());
    }
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Midnight on the given (1-based month) date
    pub fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        midnight(2024, 2, 29)
    }
}

/// A calendar already laid out for the given month, with deterministic ids
pub fn calendar_for(year: i32, month0: i32) -> MonthCalendar {
    let mut calendar = MonthCalendar::with_id_generator(SequentialIdGenerator::new("test"));
    calendar.sync(&MonthCalendarProps::new(year as f64, month0, &[]));
    calendar
}

/// Index of `day` of the displayed month in the grid
pub fn index_of(calendar: &MonthCalendar, day: u32) -> usize {
    calendar
        .days()
        .iter()
        .position(|cell| cell.date().is_some_and(|date| date.day == day))
        .expect("day is part of the displayed month")
}
