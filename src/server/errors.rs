use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error};

use crate::extractor::ExtractError;

/// Detail sent for any unusable `url`
pub const INVALID_URL_DETAIL: &str = "A valid URL string is required";

impl ExtractError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ExtractError::InvalidInput(_) | ExtractError::ExtractionFailed(_) => {
                StatusCode::BAD_REQUEST
            }
            ExtractError::UnexpectedFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message for the `detail` field
    pub fn detail(&self) -> String {
        match self {
            ExtractError::InvalidInput(msg) => msg.clone(),
            ExtractError::ExtractionFailed(msg) => format!("Extraction error: {msg}"),
            ExtractError::UnexpectedFailure(msg) => format!("Unexpected error: {msg}"),
        }
    }
}

impl From<JsonRejection> for ExtractError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected extract payload: {}", rejection.body_text());
        ExtractError::InvalidInput(INVALID_URL_DETAIL.to_string())
    }
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            error!("Extraction failed unexpectedly: {:?}", self);
        }

        let body = Json(json!({
            "detail": self.detail(),
        }));

        (status_code, body).into_response()
    }
}
