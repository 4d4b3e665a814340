//! Error handling for the Ollama client.
//!
//! Every failure mode of the `/api/chat` call maps to a dedicated variant so
//! callers can distinguish "server not running" from "server misbehaving".
//! Response bodies carried in errors are excerpted, never echoed in full.

use thiserror::Error;

/// Errors raised by the Ollama chat client.
#[derive(Debug, Error)]
pub enum OllamaError {
    /// The configured base URL could not be combined with the chat path
    #[error("invalid Ollama URL: {0}")]
    Config(String),

    /// The Ollama endpoint could not be reached (or the connection died
    /// before a complete response arrived)
    #[error("failed to reach Ollama at {url}: {source}")]
    Unreachable {
        /// The chat endpoint URL that was attempted
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// Ollama answered with a non-200 status
    #[error("Ollama returned HTTP {status}: {body}")]
    Status {
        /// The HTTP status code returned
        status: reqwest::StatusCode,
        /// Excerpt of the response body
        body: String,
    },

    /// The response body was not valid JSON
    #[error("invalid JSON from Ollama: {body}")]
    InvalidJson {
        /// Excerpt of the response body
        body: String,
    },

    /// The response JSON carried no string `message.content`
    #[error("Ollama response missing 'message.content'")]
    MissingContent,
}
