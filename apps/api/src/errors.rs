use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::providers::ProviderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure renders the same envelope:
/// `{"success": false, "error": <message>, "errorKind": <discriminant>}`.
/// `errorKind` is additive: callers that only read `success` and `error`
/// see the behavior they always did.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized: Invalid API key")]
    Unauthorized,

    #[error("{0}")]
    Config(String),

    #[error("Unknown AI provider: {0}. Use 'gemini', 'huggingface', 'openai', or 'ollama'")]
    UnknownProvider(String),

    #[error("{context}: {source}")]
    Provider {
        context: &'static str,
        #[source]
        source: ProviderError,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::Config(msg) => {
                tracing::warn!("provider not configured: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            AppError::UnknownProvider(id) => {
                tracing::error!("unknown AI provider configured: {id}");
                (StatusCode::INTERNAL_SERVER_ERROR, "UNKNOWN_PROVIDER")
            }
            AppError::Provider { source, .. } => {
                // Full detail stays in the server log; the caller gets the
                // human-readable message only.
                tracing::error!("provider dispatch failed: {source:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "PROVIDER_ERROR")
            }
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
            "errorKind": kind,
        }));

        (status, body).into_response()
    }
}
