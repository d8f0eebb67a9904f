use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::config;
use crate::state::AppState;

/// GET /health
/// Reports the active provider and which credentials are usable, without
/// contacting any backend. Never fails.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let config = &state.config;
    let ollama_url =
        (state.providers.active() == "ollama").then(|| config.ollama_base_url.clone());

    Json(json!({
        "status": "healthy",
        "service": "vitae-api",
        "ai_provider": state.providers.active(),
        "gemini_configured": config::credential_configured(config.gemini_api_key.as_deref()),
        "huggingface_configured":
            config::credential_configured(config.huggingface_api_key.as_deref()),
        "openai_configured": config::credential_configured(config.openai_api_key.as_deref()),
        "ollama_url": ollama_url,
    }))
}
