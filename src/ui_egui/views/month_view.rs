use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Weekday};
use egui::{Margin, Pos2, Rect, Stroke, Vec2};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::palette::CalendarCellPalette;
use crate::models::day_cell::DayCell;
use crate::models::event::CalendarEvent;
use crate::models::selection::SelectionState;
use crate::models::settings::{CalendarSettings, MaxWidth, DEFAULT_CELL_HEIGHT};
use crate::services::calendar_math::{weekday_names, CalendarOptions, MonthCalendarBuilder};
use crate::services::id::{IdGenerator, UuidGenerator};
use crate::ui_egui::drag::{
    CellHandle, CellNode, CellPointerInput, ClickDragBinder, DayEventHandler, PointerEvent,
    PointerEventKind,
};
use crate::ui_egui::theme::CalendarTheme;

/// Gap between grid cells
const CELL_SPACING: f32 = 2.0;
const HEADER_HEIGHT: f32 = 30.0;

/// Receives the events the grid creates. The host owns storage and passes
/// the stored list back through [`MonthCalendarProps::events`].
#[cfg_attr(test, mockall::automock)]
pub trait CalendarHost {
    fn add_event(&mut self, event: CalendarEvent);
    fn remove_event(&mut self, event: &CalendarEvent);
}

/// Inputs supplied by the host on every frame
#[derive(Clone, Copy, Debug)]
pub struct MonthCalendarProps<'a> {
    /// Displayed year; rounded to the nearest integer
    pub year: f64,
    /// Displayed month, 0 = January; clamped into 0..=11
    pub month: i32,
    /// Events the host has stored. Only the count is read, to name new events.
    pub events: &'a [CalendarEvent],
    pub max_width: MaxWidth,
}

impl<'a> MonthCalendarProps<'a> {
    pub fn new(year: f64, month: i32, events: &'a [CalendarEvent]) -> Self {
        Self {
            year,
            month,
            events,
            max_width: MaxWidth::Full,
        }
    }

    pub fn with_max_width(mut self, max_width: MaxWidth) -> Self {
        self.max_width = max_width;
        self
    }

    /// Normalized (year, zero-based month) pair
    pub fn displayed_month(&self) -> (i32, u32) {
        (normalize_year(self.year), self.month.clamp(0, 11) as u32)
    }
}

/// Round the year and clamp it into the range chrono can represent
pub fn normalize_year(year: f64) -> i32 {
    let min = NaiveDate::MIN.year();
    let max = NaiveDate::MAX.year();
    if year.is_nan() {
        return Local::now().year();
    }
    (year.round().clamp(min as f64, max as f64)) as i32
}

/// Summary of the forwarded events handled in one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingOutcome {
    /// At least one event had its default action prevented
    pub pointer_consumed: bool,
    /// Ids of the events handed to the host
    pub added_event_ids: Vec<String>,
}

/// Result returned from [`MonthCalendar::show`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthCalendarResult {
    pub pointer_consumed: bool,
    /// Inclusive index range of the in-progress drag, lowest first
    pub selection: Option<(usize, usize)>,
    pub added_event_ids: Vec<String>,
    /// Screen rect of every grid slot, by day index
    pub cell_rects: Vec<Rect>,
}

/// Drag state shared between the widget and the listeners on its cells
struct DragState {
    selection: SelectionState,
    days: Rc<[DayCell]>,
    /// Date ranges of released drags not yet handed to the host
    completed: VecDeque<(NaiveDateTime, NaiveDateTime)>,
    /// A listener prevented the default action since the last drain
    consumed: bool,
}

impl DragState {
    fn new() -> Self {
        Self {
            selection: SelectionState::default(),
            days: Rc::from(Vec::new()),
            completed: VecDeque::new(),
            consumed: false,
        }
    }

    /// Apply one pointer event on day `day`. Returns the covered dates when the
    /// event completes a selection.
    fn apply(&mut self, event: &PointerEvent, day: usize) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match event.kind {
            PointerEventKind::Down => {
                event.prevent_default();
                self.selection.begin(day);
                log::debug!("Selection started on cell {}", day);
                None
            }
            PointerEventKind::Enter => {
                if self.selection.extend(day) {
                    event.prevent_default();
                }
                None
            }
            PointerEventKind::Up => {
                let (start, end) = self.selection.endpoints()?;
                let (Some(start_date), Some(end_date)) = (self.resolve(start), self.resolve(end))
                else {
                    log::debug!(
                        "Discarding selection {}..{}: endpoint outside the displayed month",
                        start,
                        end
                    );
                    return None;
                };

                event.prevent_default();
                self.selection.clear();
                Some((start_date, end_date))
            }
        }
    }

    fn resolve(&self, day: usize) -> Option<NaiveDateTime> {
        self.days.get(day)?.date()?.to_midnight()
    }
}

type SharedDrag = Rc<RefCell<DragState>>;

/// Month grid that turns a click-drag across day cells into a new event
pub struct MonthCalendar {
    builder: MonthCalendarBuilder,
    id_generator: Box<dyn IdGenerator>,
    displayed: Option<(i32, u32)>,
    days: Rc<[DayCell]>,
    handles: Rc<[CellHandle]>,
    drag: SharedDrag,
    handler: DayEventHandler,
    binder: ClickDragBinder,
    theme: CalendarTheme,
    cell_height: f32,
    show_weekday_header: bool,
}

impl Default for MonthCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl MonthCalendar {
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    pub fn with_id_generator(id_generator: impl IdGenerator + 'static) -> Self {
        let drag: SharedDrag = Rc::new(RefCell::new(DragState::new()));
        let state = Rc::clone(&drag);
        let handler: DayEventHandler = Rc::new(move |event: &PointerEvent, day: usize| {
            let mut state = state.borrow_mut();
            if let Some(range) = state.apply(event, day) {
                state.completed.push_back(range);
            }
            state.consumed |= event.default_prevented();
        });

        Self {
            builder: MonthCalendarBuilder::new(CalendarOptions {
                sibling_months: true,
                week_start: Weekday::Mon,
            }),
            id_generator: Box::new(id_generator),
            displayed: None,
            days: Rc::from(Vec::new()),
            handles: Rc::from(Vec::new()),
            drag,
            handler,
            binder: ClickDragBinder::new(),
            theme: CalendarTheme::light(),
            cell_height: DEFAULT_CELL_HEIGHT,
            show_weekday_header: true,
        }
    }

    /// Apply display settings (theme, cell height, header)
    pub fn apply_settings(&mut self, settings: &CalendarSettings) {
        self.theme = CalendarTheme::from_name(&settings.theme);
        self.cell_height = settings.cell_height;
        self.show_weekday_header = settings.show_weekday_header;
    }

    pub fn days(&self) -> &[DayCell] {
        &self.days
    }

    pub fn handles(&self) -> &[CellHandle] {
        &self.handles
    }

    pub fn selection(&self) -> SelectionState {
        self.drag.borrow().selection
    }

    pub fn displayed_month(&self) -> Option<(i32, u32)> {
        self.displayed
    }

    /// Drop an in-progress selection without creating an event
    pub fn cancel_selection(&mut self) {
        let mut drag = self.drag.borrow_mut();
        if drag.selection.is_active() {
            log::debug!("Selection cancelled by host");
        }
        drag.selection.clear();
    }

    /// Rebuild the day cells when the displayed month changed and keep the
    /// listeners bound to the current handle list
    pub fn sync(&mut self, props: &MonthCalendarProps<'_>) {
        let target = props.displayed_month();
        if self.displayed != Some(target) {
            let (year, month0) = target;
            let days = self.builder.month_cells(year, month0);
            log::debug!(
                "Laying out {}-{:02}: {} cells",
                year,
                month0 + 1,
                days.len()
            );

            self.handles = (0..days.len()).map(|_| CellNode::new_handle()).collect();
            self.days = days.into();
            let mut drag = self.drag.borrow_mut();
            drag.days = Rc::clone(&self.days);
            // Old indices do not address the new list
            drag.selection.clear();
            drop(drag);
            self.displayed = Some(target);
        }

        self.binder.sync(&self.handles, &self.handler);
    }

    /// Interpret one pointer event on day `day`, handing a completed
    /// selection to the host right away
    pub fn handle_day_event(
        &mut self,
        event: &PointerEvent,
        day: usize,
        props: &MonthCalendarProps<'_>,
        host: &mut dyn CalendarHost,
    ) -> Option<String> {
        let (start, end) = self.drag.borrow_mut().apply(event, day)?;
        Some(self.emit(start, end, props.events.len() + 1, host))
    }

    /// Hand every selection the cell listeners completed since the last call
    /// to the host
    pub fn process_pending(
        &mut self,
        props: &MonthCalendarProps<'_>,
        host: &mut dyn CalendarHost,
    ) -> PendingOutcome {
        let (completed, consumed) = {
            let mut drag = self.drag.borrow_mut();
            (
                std::mem::take(&mut drag.completed),
                std::mem::take(&mut drag.consumed),
            )
        };

        let mut outcome = PendingOutcome {
            pointer_consumed: consumed,
            added_event_ids: Vec::with_capacity(completed.len()),
        };
        for (start, end) in completed {
            let ordinal = props.events.len() + outcome.added_event_ids.len() + 1;
            let id = self.emit(start, end, ordinal, host);
            outcome.added_event_ids.push(id);
        }

        outcome
    }

    fn emit(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        ordinal: usize,
        host: &mut dyn CalendarHost,
    ) -> String {
        let calendar_event =
            CalendarEvent::new(self.id_generator.next_id(), format!("Event {ordinal}"), start, end);
        let id = calendar_event.id.clone();
        log::info!(
            "Created '{}' from {} to {}",
            calendar_event.name,
            calendar_event.start_date().date(),
            calendar_event.end_date().date()
        );
        host.add_event(calendar_event);
        id
    }

    /// Render the grid and run this frame's pointer input through the cells
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        props: &MonthCalendarProps<'_>,
        host: &mut dyn CalendarHost,
    ) -> MonthCalendarResult {
        self.sync(props);

        let width = props.max_width.resolve(ui.available_width());
        let col_width = ((width - CELL_SPACING * 6.0) / 7.0).max(1.0);
        let palette = CalendarCellPalette::from_theme(&self.theme);

        if self.show_weekday_header {
            self.render_weekday_header(ui, palette, col_width);
            ui.add_space(5.0);
        }

        let today = Local::now().date_naive();
        let (pointer, press_origin, pressed, released) = ui.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.press_origin(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
            )
        });
        let selection = self.selection();
        let cell_size = Vec2::new(col_width, self.cell_height);
        let weeks = self.days.len() / 7;
        let mut cell_rects = Vec::with_capacity(self.days.len());
        let mut tracked_consumed = false;

        egui::Grid::new("month_calendar_grid")
            .spacing([CELL_SPACING, CELL_SPACING])
            .show(ui, |ui| {
                for week in 0..weeks {
                    for weekday in 0..7 {
                        let idx = week * 7 + weekday;
                        let cell = self.days[idx];
                        let is_today = cell
                            .date()
                            .and_then(|date| date.to_naive_date())
                            .is_some_and(|date| date == today);

                        let rect = Self::render_day_cell(
                            ui,
                            cell,
                            is_today,
                            weekday >= 5,
                            selection.contains(idx),
                            palette,
                            cell_size,
                        );

                        // A press is hit-tested where it happened, not where the
                        // pointer ended up by the end of the frame
                        tracked_consumed |= self.handles[idx].track_pointer(CellPointerInput {
                            inside: pointer_over(ui, rect, pointer),
                            pressed: pressed && pointer_over(ui, rect, press_origin),
                            released,
                        });
                        cell_rects.push(rect);
                    }
                    ui.end_row();
                }
            });

        let outcome = self.process_pending(props, host);
        let pointer_consumed = outcome.pointer_consumed || tracked_consumed;
        if pointer_consumed {
            ui.ctx().request_repaint();
        }

        MonthCalendarResult {
            pointer_consumed,
            selection: self.selection().span(),
            added_event_ids: outcome.added_event_ids,
            cell_rects,
        }
    }

    fn render_weekday_header(&self, ui: &mut egui::Ui, palette: CalendarCellPalette, col_width: f32) {
        let week_start = self.builder.options().week_start;

        egui::Grid::new("month_calendar_header")
            .spacing([CELL_SPACING, CELL_SPACING])
            .show(ui, |ui| {
                for (idx, name) in weekday_names(week_start).into_iter().enumerate() {
                    let weekday = (week_start.num_days_from_monday() as usize + idx) % 7;
                    let header_bg = if weekday >= 5 {
                        palette.header_weekend_bg
                    } else {
                        palette.header_bg
                    };

                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(header_bg)
                                .rounding(egui::Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, palette.border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |ui| {
                                    ui.centered_and_justified(|ui| {
                                        ui.label(
                                            egui::RichText::new(name)
                                                .size(14.0)
                                                .color(palette.header_text)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
                ui.end_row();
            });
    }
}

/// Whether the pointer is over `rect` and not covered by another layer
fn pointer_over(ui: &egui::Ui, rect: Rect, pointer: Option<Pos2>) -> bool {
    let Some(pos) = pointer else {
        return false;
    };
    if !rect.contains(pos) || !ui.clip_rect().contains(pos) {
        return false;
    }
    ui.ctx()
        .layer_id_at(pos)
        .map_or(true, |layer| layer == ui.layer_id())
}
