//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use db_probe::ProbeError;
use system_sampler::SamplerError;
use thiserror::Error;
use tokio::task::JoinError;

/// API-level error type that maps to HTTP responses.
///
/// Database failures never show up here: they are part of the health body.
#[derive(Debug)]
pub enum ApiError {
    /// The host could not be sampled.
    Sampling(SamplerError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Sampling(err) => {
                tracing::error!(error = %err, "system sampling failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<SamplerError> for ApiError {
    fn from(err: SamplerError) -> Self {
        ApiError::Sampling(err)
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        ApiError::Internal(format!("sampling task failed: {err}"))
    }
}

/// Failures while assembling the application at startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid database configuration: {0}")]
    Database(#[from] ProbeError),

    #[error("Failed to read index template {path}: {source}")]
    IndexTemplate {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
