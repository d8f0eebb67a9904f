use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::config::{self, Config};
use api::routes::build_router;
use api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae AI service v{}", env!("CARGO_PKG_VERSION"));

    // Startup banner: which backend is active and whether it is usable.
    match config.ai_provider.as_str() {
        "gemini" => {
            if config::credential_configured(config.gemini_api_key.as_deref()) {
                info!("Using Gemini");
            } else {
                warn!(
                    "GEMINI_API_KEY is not set. Get a free key at \
                     https://aistudio.google.com/apikey"
                );
            }
        }
        "huggingface" => {
            if config::credential_configured(config.huggingface_api_key.as_deref()) {
                info!("Using Hugging Face router");
            } else {
                warn!(
                    "HUGGINGFACE_API_KEY is not set. Get a free token at \
                     https://huggingface.co/settings/tokens"
                );
            }
        }
        "openai" => {
            if config::credential_configured(config.openai_api_key.as_deref()) {
                info!("Using OpenAI");
            } else {
                warn!(
                    "OPENAI_API_KEY is not set. Get a key at \
                     https://platform.openai.com/api-keys"
                );
            }
        }
        "ollama" => info!(
            "Using Ollama at {} with model {}",
            config.ollama_base_url, config.ollama_model
        ),
        other => warn!(
            "Unknown AI provider '{other}'. Use 'gemini', 'huggingface', 'openai', or 'ollama'"
        ),
    }

    if config.service_api_key.is_none() {
        warn!("AI_SERVICE_API_KEY is not set, API key auth is disabled");
    }

    // Build app state
    let state = AppState::new(config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
