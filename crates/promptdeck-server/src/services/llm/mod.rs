//! LLM Provider Clients
//!
//! One client per provider, with routing by model name. A missing
//! credential for the routed provider is a validation error; transport
//! and provider failures surface as upstream errors.

mod anthropic;
mod ollama;
mod openai;

use async_trait::async_trait;
use reqwest::Client;

use promptdeck::{DomainError, GenerationRequest, LlmProvider, Preferences, Provider};

/// Routes generation requests to the provider the model name implies.
pub struct LlmClient {
    http: Client,
    prefs: Preferences,
}

impl LlmClient {
    pub fn new(http: Client, prefs: Preferences) -> Self {
        Self { http, prefs }
    }
}

#[async_trait]
impl LlmProvider for LlmClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError> {
        let provider = Provider::for_model(&request.model).ok_or_else(|| {
            DomainError::validation(format!("Unsupported model: {}", request.model))
        })?;

        match provider {
            Provider::OpenAI => {
                let key = self.prefs.openai_api_key.as_deref().ok_or_else(|| {
                    DomainError::validation("OpenAI API key not configured")
                })?;
                openai::generate(&self.http, key, request).await
            }
            Provider::Anthropic => {
                let key = self.prefs.claude_api_key.as_deref().ok_or_else(|| {
                    DomainError::validation("Claude API key not configured")
                })?;
                anthropic::generate(&self.http, key, request).await
            }
            Provider::Ollama => {
                ollama::generate(&self.http, &self.prefs.ollama_endpoint, request).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unsupported_model_is_validation_error() {
        let client = LlmClient::new(Client::new(), Preferences::default());
        let request = GenerationRequest {
            prompt: "hi".to_string(),
            model: "palm-2".to_string(),
            max_tokens: 16,
            temperature: 0.0,
        };

        assert!(matches!(
            client.generate(&request).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn missing_key_is_validation_error_before_any_request() {
        let client = LlmClient::new(Client::new(), Preferences::default());
        let request = GenerationRequest {
            prompt: "hi".to_string(),
            model: "gpt-4".to_string(),
            max_tokens: 16,
            temperature: 0.0,
        };

        assert!(matches!(
            client.generate(&request).await,
            Err(DomainError::Validation(_))
        ));
    }
}
