use crate::models::settings::CalendarSettings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use super::ConfigError;

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory, or the working
    /// directory when no home directory can be resolved
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "MonthCalendar", "MonthCalendar") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings, falling back to defaults when no file exists yet
    pub fn get(&self) -> Result<CalendarSettings> {
        if !self.path.exists() {
            log::debug!("No settings file at {:?}; using defaults", self.path);
            return Ok(CalendarSettings::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        let settings: CalendarSettings = toml::from_str(&content)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to load settings from {:?}", self.path))?;
        settings.validate()?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &CalendarSettings) -> Result<()> {
        settings.validate().context("Refusing to save settings")?;

        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create settings directory {:?}", dir))?;
        }

        let content = toml::to_string_pretty(settings).map_err(ConfigError::from)?;
        std::fs::write(&self.path, content).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;

        log::info!("Saved settings to {:?}", self.path);
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&CalendarSettings::default())
    }

    /// Load settings, logging and discarding any failure
    pub fn load_or_default(&self) -> CalendarSettings {
        match self.get() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Failed to load settings, using defaults: {err:#}");
                CalendarSettings::default()
            }
        }
    }
}
