mod app;
pub mod drag;
pub mod theme;
pub mod views;

pub use app::{CalendarApp, EventStore};
pub use views::{CalendarHost, MonthCalendar, MonthCalendarProps, MonthCalendarResult};
