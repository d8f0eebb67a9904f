//! Provider abstraction: the single seam between the relay and its LLM
//! backends.
//!
//! ARCHITECTURAL RULE: no handler may speak to a backend directly. Every
//! generation call goes through [`ProviderRouter::dispatch`], which owns the
//! one active [`Provider`] adapter resolved from configuration at startup.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::errors::AppError;

pub mod gemini;
pub mod huggingface;
pub mod ollama;
pub mod openai;
mod openai_compat;

pub use gemini::GeminiProvider;
pub use huggingface::HuggingFaceProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

/// Hard cap on generated output, shared by every backend.
pub const MAX_OUTPUT_TOKENS: u32 = 4096;
/// Sampling temperature. Lower = more deterministic/professional phrasing.
pub const TEMPERATURE: f64 = 0.3;
/// Nucleus-sampling cutoff used by the backends that accept one.
pub const TOP_P: f64 = 0.9;

/// System message for the chat-style backends.
pub(crate) const SYSTEM_MESSAGE: &str =
    "You are an expert resume writer specializing in ATS optimization.";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} API error: {status} - {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("unexpected {provider} response format: {detail}")]
    Malformed {
        provider: &'static str,
        detail: String,
    },

    #[error("{0}")]
    MissingCredential(String),

    #[error("no adapter available for provider '{0}'")]
    Unavailable(String),
}

/// A text-generation backend. One implementation per provider; each owns its
/// wire contract and normalizes the backend's response into trimmed text or
/// a typed failure.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable identifier, matching the `AI_PROVIDER` setting.
    fn name(&self) -> &'static str;

    /// Verifies the adapter has a usable credential/endpoint. Never touches
    /// the network, so callers can fail fast before dispatch.
    fn check_configured(&self) -> Result<(), ProviderError>;

    /// Sends the rendered prompt and returns the generated text, trimmed.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// The four supported backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    HuggingFace,
    OpenAi,
    Ollama,
}

impl ProviderKind {
    /// Parses an `AI_PROVIDER` identifier, case-insensitively.
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            "huggingface" => Some(Self::HuggingFace),
            "openai" => Some(Self::OpenAi),
            "ollama" => Some(Self::Ollama),
            _ => None,
        }
    }
}

/// Resolves the active provider once at startup and routes every generation
/// call to it. Stateless beyond the immutable adapter reference, so a single
/// instance is shared by all concurrent requests without locking.
pub struct ProviderRouter {
    /// Raw configured identifier, reported by /health and named in errors
    /// when it matches no known backend.
    active: String,
    adapter: Option<Arc<dyn Provider>>,
}

impl ProviderRouter {
    /// Builds the router from configuration. An unknown identifier yields a
    /// router with no adapter: the process still starts and /health still
    /// answers, and `check_ready` reports the bad identifier per request.
    pub fn from_config(config: &Config) -> Self {
        let adapter: Option<Arc<dyn Provider>> = match ProviderKind::parse(&config.ai_provider) {
            Some(ProviderKind::Gemini) => {
                Some(Arc::new(GeminiProvider::new(config.gemini_api_key.clone())))
            }
            Some(ProviderKind::HuggingFace) => Some(Arc::new(HuggingFaceProvider::new(
                config.huggingface_api_key.clone(),
            ))),
            Some(ProviderKind::OpenAi) => {
                Some(Arc::new(OpenAiProvider::new(config.openai_api_key.clone())))
            }
            Some(ProviderKind::Ollama) => Some(Arc::new(OllamaProvider::new(
                config.ollama_base_url.clone(),
                config.ollama_model.clone(),
            ))),
            None => None,
        };

        Self {
            active: config.ai_provider.clone(),
            adapter,
        }
    }

    /// Builds a router around a specific adapter, bypassing identifier
    /// resolution. Lets callers wire a custom backend; tests inject stubs
    /// through this.
    pub fn with_adapter(active: impl Into<String>, adapter: Arc<dyn Provider>) -> Self {
        Self {
            active: active.into(),
            adapter: Some(adapter),
        }
    }

    /// Identifier of the active provider, as configured.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Fails without any network traffic when the active provider is unknown
    /// or its credential is unusable. Handlers call this before building a
    /// prompt so misconfiguration never costs a backend round trip.
    pub fn check_ready(&self) -> Result<(), AppError> {
        let adapter = self
            .adapter
            .as_deref()
            .ok_or_else(|| AppError::UnknownProvider(self.active.clone()))?;
        adapter
            .check_configured()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Sends the prompt to the active adapter. Exactly one adapter is
    /// invoked per call. Handlers consult `check_ready` first; the
    /// no-adapter arm exists only so a direct caller cannot bypass it.
    pub async fn dispatch(&self, prompt: &str) -> Result<String, ProviderError> {
        let adapter = self
            .adapter
            .as_deref()
            .ok_or_else(|| ProviderError::Unavailable(self.active.clone()))?;
        debug!("dispatching prompt to {}", adapter.name());
        adapter.generate(prompt).await
    }
}
