//! Theme module for the month calendar widget
//!
//! Defines the CalendarTheme structure and the light/dark presets.

use egui::Color32;

/// Colors used by the month grid and the demo host window
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Calendar grid background color, also used for padding slots
    pub calendar_background: Color32,

    /// Weekend day background color
    pub weekend_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Today's date border color
    pub today_border: Color32,

    /// Regular day background color
    pub day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Fill of cells covered by an in-progress drag
    pub selection_background: Color32,

    /// Weekday header strip
    pub header_background: Color32,
    pub header_text: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (secondary info)
    pub text_secondary: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(250, 250, 252),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            selection_background: Color32::from_rgb(200, 220, 255),
            header_background: Color32::from_rgb(235, 238, 245),
            header_text: Color32::from_rgb(60, 60, 70),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(40, 40, 40),
            weekend_background: Color32::from_rgb(35, 35, 38),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            selection_background: Color32::from_rgb(45, 70, 120),
            header_background: Color32::from_rgb(48, 50, 56),
            header_text: Color32::from_rgb(220, 220, 225),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    /// Preset for a settings theme name; unknown names get the light theme
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.day_background;
        visuals.widgets.inactive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

impl Default for CalendarTheme {
    fn default() -> Self {
        Self::light()
    }
}
