//! # Application Configuration
//!
//! Settings are layered: built-in defaults, then an optional `titles.yml`,
//! then `TITLES_*` environment variables (e.g. `TITLES_PORT=9000`).

use std::path::PathBuf;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::extractor::{
    ExtractorConfig, ExtractorMode, DEFAULT_PLAYLIST_END, DEFAULT_TIMEOUT_SECONDS,
};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "titles.yml";

/// Prefix of the environment variables that override file settings
pub const ENV_PREFIX: &str = "TITLES";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    #[error("Configuration error: {0}")]
    General(#[from] config::ConfigError),
    /// A value parsed but makes no sense.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// The root configuration structure.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// The port for the server to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding `index.html` and the other front-end assets.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default)]
    pub extractor_mode: ExtractorMode,
    /// Maximum playlist entries enumerated per request.
    #[serde(default = "default_playlist_end")]
    pub playlist_end: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default)]
    pub cookies_path: Option<String>,
    /// Explicit yt-dlp binary, skipping discovery.
    #[serde(default)]
    pub ytdlp_path: Option<String>,
    /// Explicit Python interpreter (e.g. a virtualenv's), skipping discovery.
    #[serde(default)]
    pub python: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_playlist_end() -> u32 {
    DEFAULT_PLAYLIST_END
}

fn default_timeout_seconds() -> u32 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            extractor_mode: ExtractorMode::default(),
            playlist_end: default_playlist_end(),
            timeout_seconds: default_timeout_seconds(),
            proxy: None,
            cookies_path: None,
            ytdlp_path: None,
            python: None,
        }
    }
}

impl AppConfig {
    /// Engine options derived from these settings
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig::default()
            .with_mode(self.extractor_mode)
            .with_playlist_end(self.playlist_end)
            .with_timeout(self.timeout_seconds)
            .with_proxy(self.proxy.clone())
            .with_cookies_path(self.cookies_path.clone())
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.playlist_end == 0 {
            return Err(ConfigError::Invalid("playlist_end must be at least 1".to_string()));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::Invalid("timeout_seconds must be at least 1".to_string()));
        }
        Ok(self)
    }
}

/// Loads the configuration.
///
/// `config_path_override` replaces the default `titles.yml` lookup; the file
/// is optional either way.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let config_path = config_path_override.unwrap_or(DEFAULT_CONFIG_FILE);
    if std::path::Path::new(config_path).exists() {
        info!("Loading configuration from '{config_path}'.");
    }

    let settings = ConfigBuilder::builder()
        .add_source(File::new(config_path, FileFormat::Yaml).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.extractor_config(), ExtractorConfig::default());
    }

    #[test]
    fn test_extractor_config_carries_overrides() {
        let config = AppConfig {
            extractor_mode: ExtractorMode::Cli,
            playlist_end: 25,
            proxy: Some("http://proxy:3128".to_string()),
            ..AppConfig::default()
        };
        let extractor = config.extractor_config();
        assert_eq!(extractor.mode, ExtractorMode::Cli);
        assert_eq!(extractor.playlist_end, 25);
        assert_eq!(extractor.proxy.as_deref(), Some("http://proxy:3128"));
        assert!(extractor.extract_flat && extractor.skip_download);
    }

    #[test]
    fn test_zero_playlist_end_is_rejected() {
        let config = AppConfig {
            playlist_end: 0,
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
