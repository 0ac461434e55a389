// Python MetadataExtractor - uses `python3 -m yt_dlp`
//
// Same engine as the binary, run through the interpreter. Useful where
// yt-dlp is installed with pip into a virtualenv (set the interpreter path).

use async_trait::async_trait;

use super::errors::ExtractError;
use super::models::MetadataNode;
use super::traits::{ExtractorConfig, MetadataExtractor};
use super::utils::{find_python, probe, run_engine};

/// Python-based extractor using the yt_dlp module
pub struct PythonMetadataExtractor {
    python_cmd: String,
    available: bool,
}

impl PythonMetadataExtractor {
    /// Extractor for the first python3 found on this machine
    pub fn new() -> Self {
        Self::with_interpreter(find_python())
    }

    /// Extractor for a specific interpreter. Checks once that yt_dlp imports.
    pub fn with_interpreter(python_cmd: impl Into<String>) -> Self {
        let python_cmd = python_cmd.into();
        let available = probe(&python_cmd, &["-c", "import yt_dlp"]);
        Self {
            python_cmd,
            available,
        }
    }

    pub fn interpreter(&self) -> &str {
        &self.python_cmd
    }
}

impl Default for PythonMetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataExtractor for PythonMetadataExtractor {
    fn name(&self) -> &'static str {
        "python-yt-dlp"
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
                "Python yt_dlp module not installed for '{}'",
                self.python_cmd
            )));
        }

        run_engine(self.name(), &self.python_cmd, &["-m", "yt_dlp"], url, config).await
    }
}
