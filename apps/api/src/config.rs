use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Provider credentials are deliberately optional here: the service starts
/// with whatever is present, and each request verifies the *active*
/// provider's credential before dispatch so the failure can name the exact
/// variable to set.
#[derive(Debug, Clone)]
pub struct Config {
    /// Active backend identifier: gemini | huggingface | openai | ollama.
    pub ai_provider: String,
    pub gemini_api_key: Option<String>,
    pub huggingface_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub ollama_base_url: String,
    pub ollama_model: String,
    /// Shared secret for the POST endpoints. Unset disables the check.
    pub service_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ai_provider: std::env::var("AI_PROVIDER")
                .unwrap_or_else(|_| "ollama".to_string())
                .to_lowercase(),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            huggingface_api_key: optional_env("HUGGINGFACE_API_KEY"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            service_api_key: optional_env("AI_SERVICE_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and blank as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Whether a credential is usable: present, non-blank, and not one of the
/// `your_…` placeholders shipped in `.env.example`.
pub fn credential_configured(value: Option<&str>) -> bool {
    match value {
        Some(v) => !v.trim().is_empty() && !v.starts_with("your_"),
        None => false,
    }
}
