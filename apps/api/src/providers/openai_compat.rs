//! Chat-completions wire shapes shared by the OpenAI-compatible backends.
//!
//! The Hugging Face router and OpenAI itself speak the same request/response
//! schema; both adapters build their payloads and pull out the assistant
//! text through this module so the contract lives in one place.

use serde::{Deserialize, Serialize};

use super::{MAX_OUTPUT_TOKENS, SYSTEM_MESSAGE, TEMPERATURE, TOP_P};

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: Option<AssistantMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssistantMessage {
    pub content: Option<String>,
}

/// Builds the standard two-message request: the shared system persona
/// followed by the rendered prompt, with the relay's sampling settings.
pub(crate) fn chat_request<'a>(model: &'a str, prompt: &'a str) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_MESSAGE,
            },
            ChatMessage {
                role: "user",
                content: prompt,
            },
        ],
        max_tokens: MAX_OUTPUT_TOKENS,
        temperature: TEMPERATURE,
        top_p: TOP_P,
    }
}

/// Pulls `choices[0].message.content` out of a response, or `None` when any
/// link in that chain is absent.
pub(crate) fn extract_content(response: ChatCompletionResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
}
