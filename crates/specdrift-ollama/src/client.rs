//! HTTP client for a local Ollama server's `/api/chat` endpoint.

use crate::errors::OllamaError;
use crate::prompt;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Base URL an Ollama server listens on by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "llama3";

/// Request timeout used when none is configured.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Response body excerpts carried in errors are capped at this many chars.
const BODY_EXCERPT_CHARS: usize = 500;

/// A chat message sent to or received from the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// `system`, `user`, or `assistant`
    pub role: String,
    /// The message text
    pub content: String,
}

impl Message {
    /// Build a `system` role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Build a `user` role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Configuration for the Ollama client.
pub struct OllamaConfig {
    /// Base URL of the Ollama server; `/api/chat` is joined onto this
    pub base_url: Url,
    /// Model name passed on every chat request
    pub model: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL parses"),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Wire payload for `/api/chat`.
///
/// `stream` is always false: a single complete response is easier to consume
/// than a token stream for this use case.
#[derive(Serialize)]
struct ChatPayload<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
}

/// Client for a local Ollama server.
pub struct OllamaClient {
    client: Client,
    config: OllamaConfig,
}

impl OllamaClient {
    /// Create a client with the given configuration.
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a client with the default local-server configuration.
    pub fn local() -> Self {
        Self::new(OllamaConfig::default())
    }

    fn chat_url(&self) -> Result<Url, OllamaError> {
        self.config
            .base_url
            .join("api/chat")
            .map_err(|e| OllamaError::Config(format!("cannot join chat path: {e}")))
    }

    /// Send a chat request and return the assistant's full content string.
    ///
    /// # Errors
    ///
    /// - [`OllamaError::Unreachable`] - transport failure or timeout
    /// - [`OllamaError::Status`] - non-200 HTTP status
    /// - [`OllamaError::InvalidJson`] - body is not valid JSON
    /// - [`OllamaError::MissingContent`] - no string `message.content`
    pub async fn chat(&self, messages: &[Message]) -> Result<String, OllamaError> {
        let url = self.chat_url()?;
        let payload = ChatPayload {
            model: &self.config.model,
            messages,
            stream: false,
        };

        debug!(url = %url, model = %self.config.model, "calling Ollama chat endpoint");

        let response = self
            .client
            .post(url.clone())
            .timeout(self.config.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|source| OllamaError::Unreachable {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| OllamaError::Unreachable {
                url: url.to_string(),
                source,
            })?;

        if status != StatusCode::OK {
            return Err(OllamaError::Status {
                status,
                body: excerpt(&body),
            });
        }

        let data: Value = serde_json::from_str(&body).map_err(|_| OllamaError::InvalidJson {
            body: excerpt(&body),
        })?;

        // Non-string content is treated the same as absent content.
        data.get("message")
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(OllamaError::MissingContent)
    }

    /// Ask the model to generate a regression-test module from a diff
    /// summary and a spec snippet.
    ///
    /// # Errors
    ///
    /// Same surface as [`OllamaClient::chat`].
    pub async fn generate_test_code(
        &self,
        diff_summary: &str,
        spec_snippet: &str,
    ) -> Result<String, OllamaError> {
        let messages = prompt::test_generation_messages(diff_summary, spec_snippet);
        self.chat(&messages).await
    }
}

fn excerpt(body: &str) -> String {
    if body.len() <= BODY_EXCERPT_CHARS {
        body.to_string()
    } else {
        body.chars().take(BODY_EXCERPT_CHARS).collect()
    }
}
