// Month Calendar demo host
// Main entry point

use anyhow::{anyhow, Result};
use month_calendar::services::settings::SettingsService;
use month_calendar::ui_egui::CalendarApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Calendar");

    let settings_service = SettingsService::new(SettingsService::default_path());
    let settings = settings_service.load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Month Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, settings)))),
    )
    .map_err(|err| anyhow!("Failed to run calendar window: {err}"))
}
