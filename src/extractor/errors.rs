// Error types for metadata extraction

use std::process::Output;

use thiserror::Error;

use super::diagnostics::engine_message;

/// Failure while turning a request URL into metadata.
///
/// The variants are the three outcomes callers need to tell apart: the input
/// was never valid, the engine understood the request and refused it, or
/// something broke around the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Missing or malformed URL, rejected before the engine runs
    #[error("{0}")]
    InvalidInput(String),

    /// The engine could not resolve the URL (unsupported site, network
    /// failure, private or removed content). Carries the engine's message.
    #[error("{0}")]
    ExtractionFailed(String),

    /// Anything else: engine missing, crashed, timed out or printed garbage
    #[error("{0}")]
    UnexpectedFailure(String),
}

impl ExtractError {
    /// Classify a finished engine process that exited unsuccessfully.
    ///
    /// yt-dlp reports its own handled failures on stderr as `ERROR:` lines;
    /// without one the process died for some other reason.
    pub fn from_engine_output(program: &str, output: &Output) -> Self {
        let stderr = String::from_utf8_lossy(&output.stderr);

        if let Some(message) = engine_message(&stderr) {
            return Self::ExtractionFailed(message);
        }

        let stderr = stderr.trim();
        if stderr.is_empty() {
            Self::UnexpectedFailure(format!("{} exited with {}", program, output.status))
        } else {
            let last_line = stderr.lines().last().unwrap_or(stderr);
            Self::UnexpectedFailure(format!(
                "{} exited with {}: {}",
                program, output.status, last_line
            ))
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::ExtractionFailed(_))
    }
}
