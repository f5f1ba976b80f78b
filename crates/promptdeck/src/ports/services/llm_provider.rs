//! LLM Provider Port
//!
//! Abstract interface for LLM (Large Language Model) invocations.
//! Each provider (OpenAI, Anthropic, Ollama) has its own implementation
//! in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// A single generation request to an LLM provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The fully assembled prompt text
    pub prompt: String,
    /// Model identifier (e.g. `gpt-4`, `claude-3-sonnet`, `mistral`)
    pub model: String,
    /// Maximum tokens to generate
    pub max_tokens: i32,
    /// Temperature (0.0 - 2.0)
    pub temperature: f32,
}

/// LLM Provider interface
///
/// Takes an assembled prompt and returns the generated text. Transport
/// and provider failures surface as `DomainError::Upstream`; a missing
/// credential for the chosen provider is a `DomainError::Validation`.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError>;
}
