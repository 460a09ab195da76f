//! Error types for settings parsing, validation and storage.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid settings: {0}")]
    Invalid(String),

    #[error("Invalid max width '{0}', expected a length like \"640px\", \"50%\" or \"full\"")]
    InvalidMaxWidth(String),

    #[error("Failed to read settings file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
