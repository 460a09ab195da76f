// Property-based tests for month layout and drag normalization

mod fixtures;

use chrono::{Datelike, NaiveDate, Weekday};
use fixtures::{calendar_for, RecordingHost};
use month_calendar::models::day_cell::{CalendarDate, DayCell};
use month_calendar::services::calendar_math::{days_in_month, CalendarOptions, MonthCalendarBuilder};
use month_calendar::ui_egui::drag::{PointerEvent, PointerEventKind};
use month_calendar::ui_egui::MonthCalendarProps;
use proptest::prelude::*;

fn builder() -> MonthCalendarBuilder {
    MonthCalendarBuilder::new(CalendarOptions::default())
}

proptest! {
    /// Property: the grid is made of whole weeks, four to six of them
    #[test]
    fn prop_grid_is_whole_weeks(year in 1600..2400i32, month0 in 0..12u32) {
        let cells = builder().month_cells(year, month0);

        prop_assert_eq!(cells.len() % 7, 0);
        prop_assert!((28..=42).contains(&cells.len()));
    }

    /// Property: every real day of the month appears exactly once, in order
    #[test]
    fn prop_grid_covers_each_day_once(year in 1600..2400i32, month0 in 0..12u32) {
        let cells = builder().month_cells(year, month0);
        let days: Vec<CalendarDate> = cells.iter().filter_map(DayCell::date).collect();

        let expected: Vec<CalendarDate> = (1..=days_in_month(year, month0 + 1))
            .map(|day| CalendarDate::new(year, month0, day))
            .collect();
        prop_assert_eq!(days, expected);
    }

    /// Property: each column holds a single weekday, Monday first
    #[test]
    fn prop_columns_follow_monday_first_weeks(year in 1600..2400i32, month0 in 0..12u32) {
        let cells = builder().month_cells(year, month0);

        for (idx, cell) in cells.iter().enumerate() {
            let date = match cell {
                DayCell::Day(date) | DayCell::Sibling(date) => *date,
                DayCell::Blank => continue,
            };
            let weekday = date.to_naive_date().unwrap().weekday();
            prop_assert_eq!(weekday.num_days_from_monday() as usize, idx % 7);
        }
    }

    /// Property: padding is only ever at the edges of the grid
    #[test]
    fn prop_placeholders_only_at_edges(year in 1600..2400i32, month0 in 0..12u32) {
        let cells = builder().month_cells(year, month0);
        let first_day = cells.iter().position(|c| !c.is_placeholder()).unwrap();
        let last_day = cells.iter().rposition(|c| !c.is_placeholder()).unwrap();

        prop_assert!(first_day < 7);
        prop_assert!(cells.len() - last_day <= 7);
        prop_assert!(cells[first_day..=last_day].iter().all(|c| !c.is_placeholder()));
    }

    /// Property: whatever the drag direction, the event starts on or before its end
    #[test]
    fn prop_drag_yields_ordered_event(month0 in 0..12i32, from in 1..=28u32, to in 1..=28u32) {
        let mut calendar = calendar_for(2024, month0);
        let props = MonthCalendarProps::new(2024.0, month0, &[]);
        let mut host = RecordingHost::default();

        let idx = |day: u32| {
            calendar
                .days()
                .iter()
                .position(|cell| cell.date().is_some_and(|d| d.day == day))
                .unwrap()
        };
        let (from_idx, to_idx) = (idx(from), idx(to));

        calendar.handles()[from_idx].dispatch(&PointerEvent::new(PointerEventKind::Down));
        calendar.handles()[to_idx].dispatch(&PointerEvent::new(PointerEventKind::Enter));
        calendar.handles()[to_idx].dispatch(&PointerEvent::new(PointerEventKind::Up));
        calendar.process_pending(&props, &mut host);

        prop_assert_eq!(host.added.len(), 1);
        let event = &host.added[0];
        prop_assert!(event.start_date() <= event.end_date());
        prop_assert_eq!(event.start_date().day(), from.min(to));
        prop_assert_eq!(event.end_date().day(), from.max(to));
    }
}

#[test]
fn test_february_2024_example() {
    let cells = builder().month_cells(2024, 1);

    assert_eq!(cells.len() % 7, 0);
    assert_eq!(cells[0], DayCell::Sibling(CalendarDate::new(2024, 0, 29)));
    assert_eq!(cells.iter().filter(|c| !c.is_placeholder()).count(), 29);
    assert_eq!(
        cells.last(),
        Some(&DayCell::Sibling(CalendarDate::new(2024, 2, 3)))
    );
}

#[test]
fn test_first_column_is_monday() {
    let cells = builder().month_cells(2024, 1);
    let first = match cells[0] {
        DayCell::Sibling(date) | DayCell::Day(date) => date.to_naive_date().unwrap(),
        DayCell::Blank => unreachable!(),
    };
    assert_eq!(first.weekday(), Weekday::Mon);
    assert_eq!(first, NaiveDate::from_ymd_opt(2024, 1, 29).unwrap());
}
