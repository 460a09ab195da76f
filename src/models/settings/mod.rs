// Settings module
// Display settings for the month grid, persisted as TOML

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Default grid cell height in points
pub const DEFAULT_CELL_HEIGHT: f32 = 140.0;

const KNOWN_THEMES: [&str; 2] = ["light", "dark"];

/// Upper bound on the widget's width, mirroring a CSS `max-width` value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum MaxWidth {
    /// Use all of the available width
    #[default]
    Full,
    /// Fixed width in points
    Points(f32),
    /// Fraction of the available width, in percent
    Percent(f32),
}

impl MaxWidth {
    /// Width the grid may occupy given the space offered by the parent
    pub fn resolve(&self, available: f32) -> f32 {
        match *self {
            MaxWidth::Full => available,
            MaxWidth::Points(points) => points.min(available),
            MaxWidth::Percent(percent) => available * (percent / 100.0).clamp(0.0, 1.0),
        }
    }
}

impl FromStr for MaxWidth {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let invalid = || ConfigError::InvalidMaxWidth(s.to_string());

        match value.to_ascii_lowercase().as_str() {
            "" | "full" | "none" | "auto" => return Ok(MaxWidth::Full),
            _ => {}
        }

        let (number, percent) = if let Some(number) = value.strip_suffix('%') {
            (number, true)
        } else if let Some(number) = value.strip_suffix("px") {
            (number, false)
        } else {
            (value, false)
        };

        let number: f32 = number.trim().parse().map_err(|_| invalid())?;
        if !number.is_finite() || number <= 0.0 {
            return Err(invalid());
        }

        if percent {
            if number >= 100.0 {
                Ok(MaxWidth::Full)
            } else {
                Ok(MaxWidth::Percent(number))
            }
        } else {
            Ok(MaxWidth::Points(number))
        }
    }
}

impl fmt::Display for MaxWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxWidth::Full => write!(f, "100%"),
            MaxWidth::Points(points) => write!(f, "{}px", points),
            MaxWidth::Percent(percent) => write!(f, "{}%", percent),
        }
    }
}

impl Serialize for MaxWidth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MaxWidth {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    pub theme: String,
    pub max_width: MaxWidth,
    pub cell_height: f32,
    pub show_weekday_header: bool,
    /// Year shown at startup; today's year when unset
    pub initial_year: Option<i32>,
    /// Zero-based month shown at startup; today's month when unset
    pub initial_month0: Option<i32>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            max_width: MaxWidth::Full,
            cell_height: DEFAULT_CELL_HEIGHT,
            show_weekday_header: true,
            initial_year: None,
            initial_month0: None,
        }
    }
}

impl CalendarSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !KNOWN_THEMES.contains(&self.theme.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Unknown theme '{}', expected one of {:?}",
                self.theme, KNOWN_THEMES
            )));
        }

        if !self.cell_height.is_finite() || self.cell_height <= 0.0 {
            return Err(ConfigError::Invalid(
                "Cell height must be a positive number".to_string(),
            ));
        }

        Ok(())
    }
}
