//! Day cell rendering for the month calendar.
//!
//! Placeholders keep their slot in the grid but are painted as empty
//! background with no day number.

use egui::{Pos2, Rect, Sense, Stroke, Vec2};

use super::month_view::MonthCalendar;
use super::palette::CalendarCellPalette;
use crate::models::day_cell::DayCell;

impl MonthCalendar {
    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        cell: DayCell,
        is_today: bool,
        is_weekend: bool,
        is_selected: bool,
        palette: CalendarCellPalette,
        size: Vec2,
    ) -> Rect {
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        if cell.is_placeholder() {
            ui.painter().rect_filled(rect, 2.0, palette.empty_bg);
            return rect;
        }

        let bg_color = if is_selected {
            palette.selected_bg
        } else if is_today {
            palette.today_bg
        } else if is_weekend {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg_color);

        let border = if is_selected {
            Stroke::new(2.0, palette.selected_border)
        } else if is_today {
            Stroke::new(1.0, palette.today_border)
        } else {
            Stroke::new(1.0, palette.border)
        };
        ui.painter().rect_stroke(rect, 2.0, border);

        if response.hovered() && !is_selected {
            ui.painter()
                .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
        }

        ui.painter().text(
            Pos2::new(rect.left() + 5.0, rect.top() + 5.0),
            egui::Align2::LEFT_TOP,
            cell.label(),
            egui::FontId::proportional(14.0),
            palette.text,
        );

        rect
    }
}
