pub mod gemini;
pub mod groq;
pub mod ollama;
pub mod reply;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String>;
}

/// Why a turn could not produce a reply. None of these reach the visitor.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("user message is empty")]
    EmptyUtterance,

    #[error("LLM request failed: {0}")]
    Transport(String),

    #[error("malformed LLM response: {0}")]
    MalformedResponse(String),

    #[error("reply task did not finish: {0}")]
    Interrupted(String),
}
