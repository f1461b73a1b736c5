//! The single seam to the external text-generation service.

#[cfg(feature = "openai")]
use serde::Deserialize;
use tracing::info;

use crate::error::ExplainError;

/// One completion call: a system prompt plus a single user prompt.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub api_key: &'a str,
    pub model: &'a str,
    pub base_url: &'a str,
    pub system_prompt: &'a str,
    pub prompt: &'a str,
}

/// A text-generation backend.
///
/// `complete` is blocking; async callers run it on a blocking thread.
pub trait CompletionClient: Send + Sync {
    /// Whether the backend can be used at all in this build.
    fn is_available(&self) -> bool {
        true
    }

    /// Submit the prompt and return the raw generated text.
    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, ExplainError>;
}

/// OpenAI chat-completions client.
///
/// Without the `openai` feature the client compiles but reports itself
/// unavailable.
#[derive(Clone)]
pub struct OpenAiClient {
    #[cfg(feature = "openai")]
    agent: ureq::Agent,
}

impl OpenAiClient {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "openai")]
            agent: ureq::Agent::new_with_defaults(),
        }
    }
}

impl Default for OpenAiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "openai")]
#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[cfg(feature = "openai")]
#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[cfg(feature = "openai")]
#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for OpenAiClient {
    fn is_available(&self) -> bool {
        cfg!(feature = "openai")
    }

    #[cfg(feature = "openai")]
    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, ExplainError> {
        let url = format!("{}/chat/completions", request.base_url.trim_end_matches('/'));

        let body = serde_json::json!({
            "model": request.model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.prompt },
            ],
            "response_format": { "type": "json_object" },
        });

        info!(model = request.model, "requesting explanation completion");

        let mut response = self
            .agent
            .post(&url)
            .header("Authorization", format!("Bearer {}", request.api_key))
            .send_json(&body)
            .map_err(|e| ExplainError::Invocation(e.to_string()))?;

        let completion: ChatCompletion = response
            .body_mut()
            .read_json()
            .map_err(|e| ExplainError::Invocation(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        info!(model = request.model, text_len = text.len(), "completion received");

        Ok(text)
    }

    #[cfg(not(feature = "openai"))]
    fn complete(&self, _request: &CompletionRequest<'_>) -> Result<String, ExplainError> {
        info!("openai feature disabled, skipping completion");
        Err(ExplainError::ClientUnavailable)
    }
}
