//! Shared-secret gate for the generation endpoints.
//!
//! Enforcement is opt-in: when `AI_SERVICE_API_KEY` is unset, every request
//! passes. That permissive posture is deliberate for local development;
//! deployments that want the check set the variable and every generation
//! request must then carry the matching header.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects any request whose `X-API-Key` header does not match the
/// configured shared secret. Runs before body extraction, so an
/// unauthorized caller learns nothing about payload validation.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = state.config.service_api_key.as_deref() {
        let provided = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());
        if provided != Some(expected) {
            warn!("Rejected request with missing or invalid API key");
            return Err(AppError::Unauthorized);
        }
    }

    Ok(next.run(request).await)
}
