//! Request and response bodies of the JSON API.

use serde::{Deserialize, Serialize};

use crate::extractor::OrchestratorStatus;
use crate::titles::TitleList;

/// The request body for `POST /api/extract`.
///
/// `url` is optional here so a missing field reaches the handler and gets the
/// same 400 as an empty one.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// The response body for `POST /api/extract`.
#[derive(Debug, Serialize)]
pub struct ExtractionResponse {
    pub count: usize,
    pub titles: TitleList,
}

impl From<TitleList> for ExtractionResponse {
    fn from(titles: TitleList) -> Self {
        Self {
            count: titles.len(),
            titles,
        }
    }
}

/// The response body for `GET /api/status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub extractor: OrchestratorStatus,
    pub playlist_end: u32,
}
