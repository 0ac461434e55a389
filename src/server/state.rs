use std::path::PathBuf;
use std::sync::Arc;

use crate::extractor::{ExtractorConfig, MetadataExtractor, MetadataExtractorOrchestrator};

use super::config::AppConfig;

/// The shared application state.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn MetadataExtractor>,
    /// Orchestrator behind `extractor`, when running the real engine
    pub orchestrator: Option<Arc<MetadataExtractorOrchestrator>>,
    pub extractor_config: Arc<ExtractorConfig>,
    pub static_dir: PathBuf,
}

impl AppState {
    /// State around an arbitrary extractor (tests, embedding)
    pub fn new(
        extractor: Arc<dyn MetadataExtractor>,
        extractor_config: ExtractorConfig,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            extractor,
            orchestrator: None,
            extractor_config: Arc::new(extractor_config),
            static_dir: static_dir.into(),
        }
    }
}

/// Builds the shared application state from the configuration.
///
/// Probes the Python module and the yt-dlp binary once, up front.
pub fn build_app_state(config: &AppConfig) -> AppState {
    let orchestrator = Arc::new(MetadataExtractorOrchestrator::with_paths(
        config.python.clone(),
        config.ytdlp_path.clone(),
    ));

    AppState {
        extractor: orchestrator.clone(),
        orchestrator: Some(orchestrator),
        extractor_config: Arc::new(config.extractor_config()),
        static_dir: config.static_dir.clone(),
    }
}
