//! Settings struct with TOML-based sections.
//!
//! Each section maps to a TOML table; every field has a default so a
//! partial (or absent) config file is always usable.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Pipeline behavior settings.
    #[serde(default)]
    pub pipeline: PipelineSettings,
}

/// HTTP bind configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Path configuration for pipeline outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Directory where annotated videos and tracking JSON are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("../tracking_output")
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Pipeline behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Annotate/record every Nth frame.
    #[serde(default = "default_sample_interval")]
    pub sample_interval: u64,

    /// Log progress every N frames.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

fn default_sample_interval() -> u64 {
    5
}

fn default_progress_interval() -> u64 {
    300
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            sample_interval: default_sample_interval(),
            progress_interval: default_progress_interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_contract() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.paths.output_dir, PathBuf::from("../tracking_output"));
        assert_eq!(settings.pipeline.sample_interval, 5);
        assert_eq!(settings.pipeline.progress_interval, 300);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = Settings::default();
        let toml_str = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.server.port, settings.server.port);
        assert_eq!(parsed.paths.output_dir, settings.paths.output_dir);
    }
}
