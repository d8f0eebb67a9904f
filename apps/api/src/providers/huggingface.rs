//! Hugging Face backend, via the router's OpenAI-compatible chat endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::openai_compat::{self, ChatCompletionResponse};
use super::{Provider, ProviderError};
use crate::config;

const HF_ROUTER_BASE_URL: &str = "https://router.huggingface.co";
const HF_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

/// Hosted OSS models can be slow to first token; allow a generous window.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub struct HuggingFaceProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl HuggingFaceProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: HF_ROUTER_BASE_URL.to_string(),
        }
    }

    /// Points the adapter at an alternate endpoint, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Provider for HuggingFaceProvider {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn check_configured(&self) -> Result<(), ProviderError> {
        if config::credential_configured(self.api_key.as_deref()) {
            Ok(())
        } else {
            Err(ProviderError::MissingCredential(
                "Hugging Face API key not configured. Set HUGGINGFACE_API_KEY in .env".to_string(),
            ))
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = openai_compat::chat_request(HF_MODEL, prompt);

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .bearer_auth(self.api_key.as_deref().unwrap_or_default())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                provider: "Hugging Face",
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        let text =
            openai_compat::extract_content(parsed).ok_or_else(|| ProviderError::Malformed {
                provider: "Hugging Face",
                detail: "missing choices[0].message.content".to_string(),
            })?;
        debug!("Hugging Face returned {} characters", text.len());
        Ok(text.trim().to_string())
    }
}
