use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
///
/// Every upstream failure is converted to one of these at the orchestration
/// boundary; nothing from `reqwest` or `serde_json` reaches the transport
/// layer uncaught. Each variant carries a stable `code` so callers can react
/// programmatically (e.g. switch to direct-ID lookup when search is blocked).
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid video ID format: {0}")]
    InvalidId(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Video not found or not accessible")]
    VideoNotFound,

    #[error("No audio streams available for this video")]
    NoAudioStreams,

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Search request rejected upstream: {0}")]
    SearchBlocked(String),

    #[error("Search timed out: {0}")]
    SearchTimeout(String),

    #[error("Catalog service unavailable")]
    ServiceUnavailable,

    #[error("Stream resolution failed: {0}")]
    Stream(String),
}

impl AppError {
    /// Stable machine-readable error code included in every error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidId(_) => "INVALID_ID",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::VideoNotFound => "VIDEO_NOT_FOUND",
            AppError::NoAudioStreams => "NO_AUDIO_STREAMS",
            AppError::SearchFailed(_) => "SEARCH_FAILED",
            AppError::SearchBlocked(_) => "SEARCH_BLOCKED",
            AppError::SearchTimeout(_) => "SEARCH_TIMEOUT",
            AppError::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            AppError::Stream(_) => "STREAM_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::VideoNotFound | AppError::NoAudioStreams => {
                StatusCode::NOT_FOUND
            }
            AppError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::SearchFailed(_)
            | AppError::SearchBlocked(_)
            | AppError::SearchTimeout(_)
            | AppError::Stream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Classifies a transport error from the catalog client.
    ///
    /// Timeouts and connection-level rejections get their own codes so
    /// callers can distinguish "the catalog is throttling us" from a plain
    /// protocol failure.
    pub fn from_search_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::SearchTimeout(err.to_string())
        } else if err.is_connect() {
            AppError::SearchBlocked(err.to_string())
        } else {
            AppError::SearchFailed(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
            "code": self.code(),
        }));

        (self.status(), body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
