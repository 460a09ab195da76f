//! Month layout calculation.
//!
//! Computes the ordered list of grid slots for a year/month, padded with
//! leading and trailing cells so the grid is made of whole weeks.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::day_cell::{CalendarDate, DayCell};

/// Layout options for [`MonthCalendarBuilder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Attach adjacent-month dates to padding cells
    pub sibling_months: bool,
    /// First column of each week
    pub week_start: Weekday,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            sibling_months: true,
            week_start: Weekday::Mon,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MonthCalendarBuilder {
    options: CalendarOptions,
}

impl MonthCalendarBuilder {
    pub fn new(options: CalendarOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CalendarOptions {
        self.options
    }

    /// Grid cells for `month0` (0 = January) of `year`.
    ///
    /// The result always has a length that is a multiple of 7. Returns an empty
    /// list when the month cannot be represented by chrono.
    pub fn month_cells(&self, year: i32, month0: u32) -> Vec<DayCell> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month0 + 1, 1) else {
            return Vec::new();
        };
        let days_in_month = days_in_month(year, month0 + 1);

        let leading = leading_padding(first.weekday(), self.options.week_start);
        let total_cells = (leading + days_in_month).div_ceil(7) * 7;
        let trailing = total_cells - leading - days_in_month;

        let mut cells = Vec::with_capacity(total_cells as usize);

        for offset in (1..=leading).rev() {
            let date = first.checked_sub_signed(Duration::days(offset as i64));
            cells.push(self.padding(date));
        }

        cells.extend((1..=days_in_month).map(|day| DayCell::Day(CalendarDate::new(year, month0, day))));

        let last = first + Duration::days(days_in_month as i64 - 1);
        for offset in 1..=trailing {
            let date = last.checked_add_signed(Duration::days(offset as i64));
            cells.push(self.padding(date));
        }

        cells
    }

    fn padding(&self, date: Option<NaiveDate>) -> DayCell {
        match date {
            Some(date) if self.options.sibling_months => DayCell::Sibling(date.into()),
            _ => DayCell::Blank,
        }
    }
}

/// Number of days in a month (`month` is 1-based). Falls back to 31 past
/// the end of chrono's range, where only the final December can land.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };

    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 31,
    }
}

/// How many slots precede day 1 when weeks start on `week_start`
fn leading_padding(first_weekday: Weekday, week_start: Weekday) -> u32 {
    (first_weekday.num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7
}

/// Short weekday names in column order
pub fn weekday_names(week_start: Weekday) -> Vec<&'static str> {
    let all_days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let start = week_start.num_days_from_monday() as usize;
    (0..7).map(|i| all_days[(start + i) % 7]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn builder() -> MonthCalendarBuilder {
        MonthCalendarBuilder::new(CalendarOptions::default())
    }

    #[test]
    fn test_february_2024_layout() {
        let cells = builder().month_cells(2024, 1);

        assert_eq!(cells.len(), 35);
        assert_eq!(
            &cells[..3],
            &[
                DayCell::Sibling(CalendarDate::new(2024, 0, 29)),
                DayCell::Sibling(CalendarDate::new(2024, 0, 30)),
                DayCell::Sibling(CalendarDate::new(2024, 0, 31)),
            ]
        );
        assert_eq!(cells[3], DayCell::Day(CalendarDate::new(2024, 1, 1)));
        assert_eq!(cells[31], DayCell::Day(CalendarDate::new(2024, 1, 29)));
        assert_eq!(
            &cells[32..],
            &[
                DayCell::Sibling(CalendarDate::new(2024, 2, 1)),
                DayCell::Sibling(CalendarDate::new(2024, 2, 2)),
                DayCell::Sibling(CalendarDate::new(2024, 2, 3)),
            ]
        );
    }

    #[test]
    fn test_month_starting_on_week_start_has_no_leading_padding() {
        // April 1, 2024 is a Monday
        let cells = builder().month_cells(2024, 3);
        assert_eq!(cells[0], DayCell::Day(CalendarDate::new(2024, 3, 1)));
        assert_eq!(cells.len(), 35);
    }

    #[test]
    fn test_february_2021_fills_exactly_four_weeks() {
        // Feb 1, 2021 is a Monday and the month has 28 days
        let cells = builder().month_cells(2021, 1);
        assert_eq!(cells.len(), 28);
        assert!(cells.iter().all(|cell| !cell.is_placeholder()));
    }

    #[test]
    fn test_six_week_month() {
        // Sep 1, 2024 is a Sunday: six leading slots with a Monday start
        let cells = builder().month_cells(2024, 8);
        assert_eq!(cells.len(), 42);
        assert_eq!(cells.iter().take_while(|c| c.is_placeholder()).count(), 6);
    }

    #[test]
    fn test_sunday_week_start() {
        let builder = MonthCalendarBuilder::new(CalendarOptions {
            sibling_months: true,
            week_start: Weekday::Sun,
        });
        // Sep 1, 2024 is a Sunday
        let cells = builder.month_cells(2024, 8);
        assert_eq!(cells[0], DayCell::Day(CalendarDate::new(2024, 8, 1)));
        assert_eq!(cells.len(), 35);
    }

    #[test]
    fn test_without_sibling_months_padding_is_blank() {
        let builder = MonthCalendarBuilder::new(CalendarOptions {
            sibling_months: false,
            week_start: Weekday::Mon,
        });
        let cells = builder.month_cells(2024, 1);
        assert_eq!(cells[0], DayCell::Blank);
        assert_eq!(cells[34], DayCell::Blank);
    }

    #[test]
    fn test_year_boundary_siblings() {
        // Jan 1, 2025 is a Wednesday
        let cells = builder().month_cells(2025, 0);
        assert_eq!(cells[0], DayCell::Sibling(CalendarDate::new(2024, 11, 30)));
        assert_eq!(cells[1], DayCell::Sibling(CalendarDate::new(2024, 11, 31)));
    }

    #[test]
    fn test_unrepresentable_month_is_empty() {
        assert!(builder().month_cells(2024, 12).is_empty());
    }

    #[test_case(2024, 2, 29 ; "leap february")]
    #[test_case(2023, 2, 28 ; "common february")]
    #[test_case(1900, 2, 28 ; "century not leap")]
    #[test_case(2000, 2, 29 ; "quadricentennial leap")]
    #[test_case(2024, 4, 30 ; "april")]
    #[test_case(2024, 12, 31 ; "december")]
    fn test_days_in_month(year: i32, month: u32, expected: u32) {
        assert_eq!(days_in_month(year, month), expected);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_names(Weekday::Mon)[0], "Mon");
        assert_eq!(weekday_names(Weekday::Mon)[6], "Sun");
        assert_eq!(weekday_names(Weekday::Sun)[0], "Sun");
    }
}
