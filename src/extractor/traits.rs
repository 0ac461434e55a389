// MetadataExtractor trait and engine options

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ExtractError;
use super::models::MetadataNode;

/// Default cap on playlist entries the engine enumerates
pub const DEFAULT_PLAYLIST_END: u32 = 2000;

/// Default network and process timeout, in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u32 = 120;

/// Which yt-dlp backend to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorMode {
    /// Python module yt_dlp
    Python,
    /// Native yt-dlp binary
    Cli,
    /// Python module when importable, binary otherwise
    #[default]
    Auto,
}

impl fmt::Display for ExtractorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::Cli => write!(f, "cli"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Options bag handed to the extraction engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Backend selection
    pub mode: ExtractorMode,
    /// Suppress engine console output
    pub quiet: bool,
    pub no_warnings: bool,
    /// Never fetch media, metadata only
    pub skip_download: bool,
    /// Resolve playlist entries shallowly (id/title) instead of one by one
    pub extract_flat: bool,
    /// Stop enumerating a playlist after this many entries
    pub playlist_end: u32,
    /// Socket timeout passed to the engine; the whole run gets the same budget
    pub timeout_seconds: u32,
    /// SOCKS5/HTTP proxy URL
    pub proxy: Option<String>,
    /// Path to cookies.txt file
    pub cookies_path: Option<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            mode: ExtractorMode::Auto,
            quiet: true,
            no_warnings: true,
            skip_download: true,
            extract_flat: true,
            playlist_end: DEFAULT_PLAYLIST_END,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            proxy: None,
            cookies_path: None,
        }
    }
}

impl ExtractorConfig {
    pub fn with_mode(mut self, mode: ExtractorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_playlist_end(mut self, playlist_end: u32) -> Self {
        self.playlist_end = playlist_end;
        self
    }

    pub fn with_timeout(mut self, seconds: u32) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_cookies_path(mut self, path: Option<String>) -> Self {
        self.cookies_path = path;
        self
    }

    /// yt-dlp arguments for one metadata dump of `url`.
    ///
    /// The URL always follows `--`, so it can never be read as an option.
    pub fn engine_args(&self, url: &str) -> Vec<String> {
        let mut args = vec![
            "--dump-single-json".to_string(),
            "--ignore-config".to_string(),
            "--no-progress".to_string(),
        ];

        if self.quiet {
            args.push("--quiet".to_string());
        }
        if self.no_warnings {
            args.push("--no-warnings".to_string());
        }
        if self.skip_download {
            args.push("--skip-download".to_string());
        }
        if self.extract_flat {
            args.push("--flat-playlist".to_string());
        }

        args.push("--playlist-end".to_string());
        args.push(self.playlist_end.to_string());
        args.push("--socket-timeout".to_string());
        args.push(self.timeout_seconds.to_string());

        if let Some(path) = &self.cookies_path {
            args.push("--cookies".to_string());
            args.push(path.clone());
        }

        if let Some(proxy) = &self.proxy {
            args.push("--proxy".to_string());
            args.push(proxy.clone());
        }

        args.push("--".to_string());
        args.push(url.to_string());
        args
    }
}

/// Trait for metadata extractors
#[async_trait]
pub trait MetadataExtractor: Send + Sync {
    /// Name of the extractor (for logging)
    fn name(&self) -> &'static str;

    /// Check if this extractor can run at all
    fn is_available(&self) -> bool;

    /// Fetch the metadata tree behind `url`
    async fn extract(
        &self,
        url: &str,
        config: &ExtractorConfig,
    ) -> Result<MetadataNode, ExtractError>;
}
