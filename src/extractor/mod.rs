// Extraction adapter - runs yt-dlp against a URL and returns its metadata tree
//
// Two backends:
// - Python mode: `python3 -m yt_dlp`
// - CLI mode: native `yt-dlp` binary
//
// The orchestrator picks one per the configured mode. Every backend runs the
// engine with downloads skipped, flat playlist extraction and an entry cap.

mod cli;
mod diagnostics;
mod errors;
mod models;
mod orchestrator;
mod python;
mod traits;
mod utils;

pub use cli::CliMetadataExtractor;
pub use diagnostics::{diagnose_error, engine_message, FailureReason};
pub use errors::ExtractError;
pub use models::{MetadataNode, Scalar};
pub use orchestrator::{MetadataExtractorOrchestrator, OrchestratorStatus};
pub use python::PythonMetadataExtractor;
pub use traits::{
    ExtractorConfig, ExtractorMode, MetadataExtractor, DEFAULT_PLAYLIST_END,
    DEFAULT_TIMEOUT_SECONDS,
};
