// Event module
// Calendar event model handed to the host when a drag gesture completes

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A calendar event created by the month grid.
///
/// The start is never after the end: `new` swaps the two instants when they
/// arrive in reverse order, so a right-to-left drag yields the same event as
/// a left-to-right one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "EventRecord")]
pub struct CalendarEvent {
    pub id: String,
    pub name: String,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    pub all_day_event: bool,
}

impl CalendarEvent {
    /// Create an all-day event spanning `start..=end`
    ///
    /// # Examples
    /// ```
    /// use month_calendar::models::event::CalendarEvent;
    /// use chrono::NaiveDate;
    ///
    /// let later = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let earlier = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let event = CalendarEvent::new("id-1", "Event 1", later, earlier);
    /// assert_eq!(event.start_date(), earlier);
    /// assert!(event.all_day_event);
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self::with_all_day(id, name, start, end, true)
    }

    /// Create an event with an explicit all-day flag
    pub fn with_all_day(
        id: impl Into<String>,
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        all_day_event: bool,
    ) -> Self {
        let (start_date, end_date) = if start > end { (end, start) } else { (start, end) };

        Self {
            id: id.into(),
            name: name.into(),
            start_date,
            end_date,
            all_day_event,
        }
    }

    pub fn start_date(&self) -> NaiveDateTime {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDateTime {
        self.end_date
    }

    /// Number of calendar days touched by the event, counting both ends
    pub fn day_span(&self) -> i64 {
        (self.end_date.date() - self.start_date.date()).num_days() + 1
    }

    /// Check whether the event starts and ends on the same day
    pub fn is_single_day(&self) -> bool {
        self.start_date.date() == self.end_date.date()
    }
}

/// Wire shape of an event; decoding goes through `CalendarEvent::with_all_day`
/// so a stored event with reversed dates comes back normalized.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    id: String,
    name: String,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    #[serde(default = "default_all_day")]
    all_day_event: bool,
}

fn default_all_day() -> bool {
    true
}

impl From<EventRecord> for CalendarEvent {
    fn from(record: EventRecord) -> Self {
        Self::with_all_day(
            record.id,
            record.name,
            record.start_date,
            record.end_date,
            record.all_day_event,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_event_keeps_ordered_dates() {
        let start = midnight(2024, 2, 5);
        let end = midnight(2024, 2, 10);
        let event = CalendarEvent::new("abc", "Event 1", start, end);

        assert_eq!(event.id, "abc");
        assert_eq!(event.name, "Event 1");
        assert_eq!(event.start_date(), start);
        assert_eq!(event.end_date(), end);
        assert!(event.all_day_event);
    }

    #[test]
    fn test_new_event_swaps_reversed_dates() {
        let start = midnight(2024, 2, 10);
        let end = midnight(2024, 2, 5);
        let event = CalendarEvent::new("abc", "Event 1", start, end);

        assert_eq!(event.start_date(), end);
        assert_eq!(event.end_date(), start);
    }

    #[test]
    fn test_equal_dates_make_single_day_event() {
        let day = midnight(2024, 2, 29);
        let event = CalendarEvent::new("abc", "Event 1", day, day);

        assert!(event.is_single_day());
        assert_eq!(event.day_span(), 1);
    }

    #[test]
    fn test_day_span_counts_both_ends() {
        let event = CalendarEvent::new("abc", "Event 1", midnight(2024, 1, 30), midnight(2024, 2, 2));
        assert_eq!(event.day_span(), 4);
        assert!(!event.is_single_day());
    }

    #[test]
    fn test_with_all_day_false() {
        let event = CalendarEvent::with_all_day(
            "abc",
            "Standup",
            midnight(2024, 3, 1),
            midnight(2024, 3, 1),
            false,
        );
        assert!(!event.all_day_event);
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let event = CalendarEvent::new("abc", "Event 1", midnight(2024, 2, 5), midnight(2024, 2, 6));
        let encoded = toml::to_string(&event).unwrap();

        assert!(encoded.contains("startDate"));
        assert!(encoded.contains("allDayEvent"));

        let decoded: CalendarEvent = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_decoding_normalizes_reversed_dates() {
        let encoded = r#"
id = "abc"
name = "Event 1"
startDate = "2024-02-10T00:00:00"
endDate = "2024-02-05T00:00:00"
"#;
        let decoded: CalendarEvent = toml::from_str(encoded).unwrap();

        assert_eq!(decoded.start_date(), midnight(2024, 2, 5));
        assert_eq!(decoded.end_date(), midnight(2024, 2, 10));
        assert!(decoded.all_day_event);
    }
}
