// Failure diagnostics - reads the engine's stderr
//
// yt-dlp prints handled failures as `ERROR: ...` lines, usually prefixed with
// the extractor name, e.g. `ERROR: [youtube] abc123: Video unavailable`.
// This module pulls those lines out and sorts them into coarse reasons so
// logs can be grouped.

use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    static ref ERROR_LINE_RE: Regex = Regex::new(r"(?m)^ERROR:.*$").unwrap();
}

/// Why the engine refused a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// No extractor matches the URL
    UnsupportedUrl,

    /// Deleted, removed or otherwise gone
    VideoUnavailable,

    /// Private video or playlist
    PrivateContent,

    /// Needs a signed-in, age-verified account
    AgeRestricted,

    /// Not available in the server's region
    GeoBlocked,

    /// HTTP 429 or similar
    RateLimited,

    /// Captcha or "confirm you're not a bot"
    BotDetection,

    /// HTTP 403 Forbidden
    Http403Forbidden,

    /// DNS failure, refused connection, socket timeout
    Network,

    /// Anything we don't recognise
    Unknown,
}

impl FailureReason {
    /// Whether the same URL might succeed if tried again later
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::BotDetection | Self::Http403Forbidden | Self::Network
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::UnsupportedUrl => "Unsupported URL",
            Self::VideoUnavailable => "Content unavailable",
            Self::PrivateContent => "Private content",
            Self::AgeRestricted => "Age-restricted content",
            Self::GeoBlocked => "Geographic restriction",
            Self::RateLimited => "Rate limited by the site",
            Self::BotDetection => "Bot detection triggered",
            Self::Http403Forbidden => "Access denied (HTTP 403)",
            Self::Network => "Network failure",
            Self::Unknown => "Unknown failure",
        }
    }
}

/// The engine's own error text: every `ERROR:` line on stderr, in order.
pub fn engine_message(stderr: &str) -> Option<String> {
    let lines: Vec<&str> = ERROR_LINE_RE
        .find_iter(stderr)
        .map(|m| m.as_str().trim())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Sort an engine error message into a reason
pub fn diagnose_error(error: &str) -> Option<FailureReason> {
    let lower = error.to_lowercase();

    if lower.contains("unsupported url") || lower.contains("is not a valid url") {
        return Some(FailureReason::UnsupportedUrl);
    }

    if lower.contains("private video")
        || lower.contains("video is private")
        || lower.contains("playlist is private")
        || lower.contains("sign in if you've been granted access")
    {
        return Some(FailureReason::PrivateContent);
    }

    if lower.contains("age-restricted")
        || lower.contains("sign in to confirm your age")
        || lower.contains("age_verification")
    {
        return Some(FailureReason::AgeRestricted);
    }

    if lower.contains("video unavailable")
        || lower.contains("video has been removed")
        || lower.contains("no longer available")
        || lower.contains("does not exist")
        || lower.contains("http error 404")
    {
        return Some(FailureReason::VideoUnavailable);
    }

    if lower.contains("not available in your country")
        || lower.contains("blocked in your country")
        || lower.contains("geo restriction")
        || lower.contains("geo-restricted")
    {
        return Some(FailureReason::GeoBlocked);
    }

    if lower.contains("429") || lower.contains("rate limit") || lower.contains("too many requests") {
        return Some(FailureReason::RateLimited);
    }

    if lower.contains("not a bot")
        || lower.contains("captcha")
        || lower.contains("unusual traffic")
    {
        return Some(FailureReason::BotDetection);
    }

    if lower.contains("403") || lower.contains("forbidden") {
        return Some(FailureReason::Http403Forbidden);
    }

    if lower.contains("timed out")
        || lower.contains("timeout")
        || lower.contains("connection refused")
        || lower.contains("network is unreachable")
        || lower.contains("name or service not known")
        || lower.contains("failed to resolve")
        || lower.contains("getaddrinfo failed")
    {
        return Some(FailureReason::Network);
    }

    if !error.trim().is_empty() {
        return Some(FailureReason::Unknown);
    }

    None
}
