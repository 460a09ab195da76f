mod service;

pub use crate::error::ConfigError;
pub use service::SettingsService;
