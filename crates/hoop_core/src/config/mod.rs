//! Service configuration.
//!
//! Settings are loaded once at startup from an optional TOML file and
//! passed explicitly into the pipeline; there is no global state.

mod settings;

use std::io;
use std::path::Path;

use thiserror::Error;

pub use settings::{PathSettings, PipelineSettings, ServerSettings, Settings};

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load settings from a TOML file, or return defaults when no path is given.
///
/// A path that exists but cannot be read or parsed is an error; missing
/// sections and fields within the file fall back to their defaults.
pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Settings> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let settings = toml::from_str(&content)?;
            Ok(settings)
        }
        None => Ok(Settings::default()),
    }
}
