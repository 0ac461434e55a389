//! Lists the video titles behind a video or playlist URL.
//!
//! [`extractor`] runs yt-dlp and returns its metadata tree, [`titles`]
//! flattens that tree into distinct titles, and [`server`] exposes both over
//! HTTP next to a small static front end.

pub mod extractor;
pub mod server;
pub mod titles;

pub use extractor::{ExtractError, ExtractorConfig, MetadataExtractor, MetadataNode};
pub use titles::{flatten, TitleList};
