//! Completion client for OpenAI-compatible chat APIs.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::time::Instant;

use crate::config::{Config, SecureString};

use super::error::CompletionError;
use super::types::{ApiErrorBody, ChatMessage, ChatRequest, ChatResponse};

/// Something that turns a message list into a single completion.
///
/// The mediator only talks to this trait, so tests can substitute a scripted
/// client for the HTTP one.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Request one completion and return the text of the first choice.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, CompletionError>;
}

/// Client for the `/chat/completions` endpoint.
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Build a client authorized with `api_key`.
    ///
    /// Fails with `InvalidCredential` when the key cannot be carried in an
    /// HTTP header (control characters, non-visible bytes).
    pub fn new(api_key: &SecureString, config: &Config) -> Result<Self, CompletionError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key.expose()))
            .map_err(|_| {
                CompletionError::InvalidCredential(
                    "key contains characters that cannot be sent".to_string(),
                )
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, CompletionError> {
        let url = self.endpoint();
        let body = ChatRequest {
            model: &self.model,
            messages: &messages,
        };

        tracing::debug!(
            url = %url,
            model = %self.model,
            message_count = messages.len(),
            "Sending completion request"
        );

        let start = Instant::now();
        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or(text);
            tracing::warn!(status = %status, latency_ms, error = %message, "Completion API error");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)?;

        tracing::debug!(latency_ms, content_len = content.len(), "Completion received");
        Ok(content)
    }
}
