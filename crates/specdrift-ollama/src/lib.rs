//! Ollama chat client for specdrift
//!
//! Talks to a locally hosted Ollama server over `/api/chat` and builds the
//! prompts that turn a spec diff summary into a generated regression-test
//! module. The network boundary is fully owned here; the core diff engine
//! never performs I/O.

pub mod client;
pub mod errors;
pub mod prompt;

// Re-export commonly used types
pub use client::{Message, OllamaClient, OllamaConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use errors::OllamaError;
pub use prompt::{spec_snippet, test_generation_messages, SPEC_SNIPPET_MAX_CHARS};
