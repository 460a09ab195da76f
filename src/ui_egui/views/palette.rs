use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub empty_bg: Color32,
    pub selected_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub selected_border: Color32,
    pub text: Color32,
    pub hover_border: Color32,
    pub header_bg: Color32,
    pub header_weekend_bg: Color32,
    pub header_text: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        // Weekend headers sit slightly darker on light themes, lighter on dark ones
        let weekend_target = if theme.is_dark { Color32::WHITE } else { Color32::BLACK };

        Self {
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            today_bg: theme.today_background,
            empty_bg: theme.calendar_background,
            selected_bg: theme.selection_background,
            border: theme.day_border,
            today_border: theme.today_border,
            selected_border: with_alpha(theme.today_border, 200),
            text: theme.text_primary,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
            header_bg: theme.header_background,
            header_weekend_bg: blend(theme.header_background, weekend_target, 0.08),
            header_text: theme.header_text,
        }
    }
}
