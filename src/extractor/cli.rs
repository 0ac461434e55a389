// CLI MetadataExtractor - uses native `yt-dlp` binary
//
// No Python dependency, and the easiest backend to ship in a container.

use async_trait::async_trait;

use super::errors::ExtractError;
use super::models::MetadataNode;
use super::traits::{ExtractorConfig, MetadataExtractor};
use super::utils::{find_ytdlp, probe, run_engine};

/// CLI-based extractor using the yt-dlp binary
pub struct CliMetadataExtractor {
    ytdlp_path: String,
    available: bool,
}

impl CliMetadataExtractor {
    /// Extractor for the first yt-dlp found on this machine
    pub fn new() -> Self {
        Self::with_path(find_ytdlp())
    }

    /// Extractor for a specific binary. Availability is probed once, here.
    pub fn with_path(ytdlp_path: impl Into<String>) -> Self {
        let ytdlp_path = ytdlp_path.into();
        let available = probe(&ytdlp_path, &["--version"]);
        Self {
            ytdlp_path,
            available,
        }
    }

    pub fn path(&self) -> &str {
        &self.ytdlp_path
    }
}

impl Default for CliMetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataExtractor for CliMetadataExtractor {
    fn name(&self) -> &'static str {
        "cli-yt-dlp"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    async fn extract(
        &self,
        url: &str,
        config: &ExtractorConfig,
    ) -> Result<MetadataNode, ExtractError> {
        if !self.is_available() {
            return Err(ExtractError::UnexpectedFailure(format!(
                "yt-dlp binary not found at '{}'",
                self.ytdlp_path
            )));
        }

        run_engine(self.name(), &self.ytdlp_path, &[], url, config).await
    }
}
