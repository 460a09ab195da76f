// Month Calendar Library
// Embeddable egui month grid with click-drag event creation

pub mod error;
pub mod models;
pub mod services;
pub mod ui_egui;
