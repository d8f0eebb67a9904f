//! OpenAI backend, via the chat completions endpoint.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::openai_compat::{self, ChatCompletionResponse};
use super::{Provider, ProviderError};
use crate::config;

const OPENAI_BASE_URL: &str = "https://api.openai.com";
const OPENAI_MODEL: &str = "gpt-4o-mini";

pub struct OpenAiProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
        }
    }

    /// Points the adapter at an alternate endpoint, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn check_configured(&self) -> Result<(), ProviderError> {
        if config::credential_configured(self.api_key.as_deref()) {
            Ok(())
        } else {
            Err(ProviderError::MissingCredential(
                "OpenAI API key not configured. Set OPENAI_API_KEY in .env".to_string(),
            ))
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = openai_compat::chat_request(OPENAI_MODEL, prompt);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.as_deref().unwrap_or_default())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                provider: "OpenAI",
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        let text =
            openai_compat::extract_content(parsed).ok_or_else(|| ProviderError::Malformed {
                provider: "OpenAI",
                detail: "missing choices[0].message.content".to_string(),
            })?;
        debug!("OpenAI returned {} characters", text.len());
        Ok(text.trim().to_string())
    }
}
