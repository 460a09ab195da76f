use chrono::{Datelike, Local, NaiveDate};

use crate::models::event::CalendarEvent;
use crate::models::settings::CalendarSettings;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::{CalendarHost, MonthCalendar, MonthCalendarProps};

/// In-memory event storage for the demo window
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }
}

impl CalendarHost for EventStore {
    fn add_event(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    fn remove_event(&mut self, event: &CalendarEvent) {
        self.events.retain(|existing| existing.id != event.id);
    }
}

pub struct CalendarApp {
    settings: CalendarSettings,
    theme: CalendarTheme,
    calendar: MonthCalendar,
    store: EventStore,
    year: i32,
    /// Zero-based, as the widget expects
    month0: i32,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.calendar.cancel_selection();
        }

        self.render_header(ctx);
        self.render_event_list(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let events = self.store.events().to_vec();
            let props = MonthCalendarProps::new(self.year as f64, self.month0, &events)
                .with_max_width(self.settings.max_width);
            self.calendar.show(ui, &props, &mut self.store);
        });
    }
}

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: CalendarSettings) -> Self {
        let today = Local::now().date_naive();
        let theme = CalendarTheme::from_name(&settings.theme);
        theme.apply_to_context(&cc.egui_ctx);

        let mut calendar = MonthCalendar::new();
        calendar.apply_settings(&settings);

        Self {
            year: settings.initial_year.unwrap_or(today.year()),
            month0: settings.initial_month0.unwrap_or(today.month0() as i32),
            settings,
            theme,
            calendar,
            store: EventStore::default(),
        }
    }

    fn navigate_previous(&mut self) {
        (self.year, self.month0) = step_month(self.year, self.month0, -1);
    }

    fn navigate_next(&mut self) {
        (self.year, self.month0) = step_month(self.year, self.month0, 1);
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("month_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("◀").clicked() {
                    self.navigate_previous();
                }
                if ui.button("Today").clicked() {
                    let today = Local::now().date_naive();
                    self.year = today.year();
                    self.month0 = today.month0() as i32;
                }
                if ui.button("▶").clicked() {
                    self.navigate_next();
                }

                let title = NaiveDate::from_ymd_opt(self.year, self.month0 as u32 + 1, 1)
                    .map(|date| date.format("%B %Y").to_string())
                    .unwrap_or_default();
                ui.heading(egui::RichText::new(title).color(self.theme.text_primary));
            });
        });
    }

    fn render_event_list(&mut self, ctx: &egui::Context) {
        let mut to_remove = None;

        egui::SidePanel::right("event_list")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Events");
                ui.separator();

                if self.store.events().is_empty() {
                    ui.label(
                        egui::RichText::new("Drag across days to create an event")
                            .color(self.theme.text_secondary),
                    );
                }

                for event in self.store.events() {
                    ui.horizontal(|ui| {
                        let range = if event.is_single_day() {
                            event.start_date().format("%b %d").to_string()
                        } else {
                            format!(
                                "{} – {}",
                                event.start_date().format("%b %d"),
                                event.end_date().format("%b %d")
                            )
                        };
                        ui.label(format!("{} ({})", event.name, range));
                        if ui.small_button("✖").clicked() {
                            to_remove = Some(event.clone());
                        }
                    });
                }
            });

        if let Some(event) = to_remove {
            log::info!("Removing '{}'", event.name);
            self.store.remove_event(&event);
        }
    }
}

/// Move a (year, zero-based month) pair by `delta` months
fn step_month(year: i32, month0: i32, delta: i32) -> (i32, i32) {
    let total = year * 12 + month0 + delta;
    (total.div_euclid(12), total.rem_euclid(12))
}
