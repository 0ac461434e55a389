use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::extractor::{ExtractError, OrchestratorStatus};
use crate::titles::flatten;

use super::errors::INVALID_URL_DETAIL;
use super::state::AppState;
use super::types::{ExtractRequest, ExtractionResponse, StatusResponse};

/// The health check handler.
pub async fn health_check() -> &'static str {
    "OK"
}

/// The handler for `POST /api/extract`.
///
/// Validates the URL, runs the extractor once and returns the distinct
/// titles it found. Any extraction error means no titles at all.
pub async fn extract_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractionResponse>, ExtractError> {
    let Json(request) = payload?;

    let url = request
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ExtractError::InvalidInput(INVALID_URL_DETAIL.to_string()))?;

    info!("Received extract request for URL: {}", url);

    let metadata = app_state
        .extractor
        .extract(url, &app_state.extractor_config)
        .await?;

    let titles = flatten(&metadata);
    info!(count = titles.len(), "Collected titles for {}", url);

    Ok(Json(ExtractionResponse::from(titles)))
}

/// The handler for `GET /api/status`.
pub async fn status_handler(State(app_state): State<AppState>) -> Json<StatusResponse> {
    let mode = app_state.extractor_config.mode;

    let extractor = match &app_state.orchestrator {
        Some(orchestrator) => orchestrator.get_status(mode),
        None => OrchestratorStatus {
            python_available: false,
            cli_available: false,
            mode,
            active_backend: app_state
                .extractor
                .is_available()
                .then(|| app_state.extractor.name()),
        },
    };

    Json(StatusResponse {
        extractor,
        playlist_end: app_state.extractor_config.playlist_end,
    })
}
