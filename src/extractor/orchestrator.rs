// MetadataExtractor Orchestrator - backend selection
//
// Strategy:
// 1. Forced mode: always that backend, even when it reports unavailable, so
//    the caller gets the backend's own "not installed" error.
// 2. Auto: Python module first, binary second.
// Exactly one backend runs per request; a failed extraction is not retried
// on the other backend.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::cli::CliMetadataExtractor;
use super::errors::ExtractError;
use super::models::MetadataNode;
use super::python::PythonMetadataExtractor;
use super::traits::{ExtractorConfig, ExtractorMode, MetadataExtractor};

/// Orchestrator that owns the Python and CLI extractors
pub struct MetadataExtractorOrchestrator {
    python: Box<dyn MetadataExtractor>,
    cli: Box<dyn MetadataExtractor>,
}

impl MetadataExtractorOrchestrator {
    /// Probe the default interpreter and binary locations
    pub fn new() -> Self {
        Self::from_backends(
            Box::new(PythonMetadataExtractor::new()),
            Box::new(CliMetadataExtractor::new()),
        )
    }

    /// Use explicit interpreter / binary paths where given
    pub fn with_paths(python_cmd: Option<String>, ytdlp_path: Option<String>) -> Self {
        let python = match python_cmd {
            Some(cmd) => PythonMetadataExtractor::with_interpreter(cmd),
            None => PythonMetadataExtractor::new(),
        };
        let cli = match ytdlp_path {
            Some(path) => CliMetadataExtractor::with_path(path),
            None => CliMetadataExtractor::new(),
        };
        Self::from_backends(Box::new(python), Box::new(cli))
    }

    pub fn from_backends(
        python: Box<dyn MetadataExtractor>,
        cli: Box<dyn MetadataExtractor>,
    ) -> Self {
        Self { python, cli }
    }

    /// Backend that will serve requests in `mode`, if any
    pub fn select(&self, mode: ExtractorMode) -> Option<&dyn MetadataExtractor> {
        match mode {
            ExtractorMode::Python => Some(self.python.as_ref()),
            ExtractorMode::Cli => Some(self.cli.as_ref()),
            ExtractorMode::Auto => {
                if self.python.is_available() {
                    Some(self.python.as_ref())
                } else if self.cli.is_available() {
                    Some(self.cli.as_ref())
                } else {
                    None
                }
            }
        }
    }

    /// Get availability status
    pub fn get_status(&self, mode: ExtractorMode) -> OrchestratorStatus {
        OrchestratorStatus {
            python_available: self.python.is_available(),
            cli_available: self.cli.is_available(),
            mode,
            active_backend: self
                .select(mode)
                .filter(|backend| backend.is_available())
                .map(|backend| backend.name()),
        }
    }
}

impl Default for MetadataExtractorOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataExtractor for MetadataExtractorOrchestrator {
    fn name(&self) -> &'static str {
        "orchestrator"
    }

    fn is_available(&self) -> bool {
        self.python.is_available() || self.cli.is_available()
    }

    async fn extract(
        &self,
        url: &str,
        config: &ExtractorConfig,
    ) -> Result<MetadataNode, ExtractError> {
        let backend = self.select(config.mode).ok_or_else(|| {
            ExtractError::UnexpectedFailure(
                "Neither Python yt_dlp nor yt-dlp binary available".to_string(),
            )
        })?;

        debug!(mode = %config.mode, backend = backend.name(), "selected extractor");
        backend.extract(url, config).await
    }
}

/// Status of the orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrchestratorStatus {
    pub python_available: bool,
    pub cli_available: bool,
    pub mode: ExtractorMode,
    /// Backend that would run now, `None` when nothing usable is installed
    pub active_backend: Option<&'static str>,
}
