// Module exports for models

pub mod day_cell;
pub mod event;
pub mod selection;
pub mod settings;
