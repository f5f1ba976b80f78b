//! Promptdeck API Client

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use uuid::Uuid;

use promptdeck::{DomainError, PromptDraft, PromptRecord, RecordBackend, INVALID_ID_PREFIX};

/// API Client for the Promptdeck server
pub struct ApiClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Deserialize)]
struct DataEnvelope {
    data: PromptRecord,
}

#[derive(Deserialize)]
struct ListEnvelope {
    data: Vec<PromptRecord>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

#[derive(Debug, Deserialize)]
pub struct SimplePromptResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct ChainOfThoughtResponse {
    pub steps: Vec<String>,
    pub final_answer: String,
}

#[derive(Debug, Deserialize)]
pub struct PreferencesView {
    pub openai_api_key: Option<String>,
    pub claude_api_key: Option<String>,
    pub ollama_endpoint: String,
    pub default_model: String,
    pub max_tokens: i32,
    pub temperature: f32,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    /// Send a simple prompt through the proxy
    pub async fn simple_prompt(
        &self,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<SimplePromptResponse> {
        let body = serde_json::json!({ "prompt": prompt, "model": model });
        let resp = self
            .client
            .post(self.url("/prompt/simple"))
            .json(&body)
            .send()
            .await
            .context("Failed to connect to Promptdeck API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Send a chain-of-thought problem through the proxy
    pub async fn chain_of_thought(
        &self,
        problem: &str,
        model: Option<&str>,
    ) -> Result<ChainOfThoughtResponse> {
        let body = serde_json::json!({ "problem": problem, "model": model });
        let resp = self
            .client
            .post(self.url("/prompt/chain-of-thought"))
            .json(&body)
            .send()
            .await
            .context("Failed to connect to Promptdeck API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Fetch the effective preferences (keys masked)
    pub async fn get_preferences(&self) -> Result<PreferencesView> {
        let resp = self
            .client
            .get(self.url("/preferences"))
            .send()
            .await
            .context("Failed to connect to Promptdeck API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Overwrite the stored preferences
    pub async fn update_preferences(&self, preferences: &serde_json::Value) -> Result<()> {
        let resp = self
            .client
            .post(self.url("/preferences"))
            .json(preferences)
            .send()
            .await
            .context("Failed to connect to Promptdeck API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(())
    }

    async fn record_error(resp: Response, id: Option<Uuid>) -> DomainError {
        let status = resp.status();
        let message = match resp.json::<ErrorEnvelope>().await {
            Ok(envelope) => envelope.error,
            Err(_) => status.to_string(),
        };

        match status {
            StatusCode::NOT_FOUND => DomainError::NotFound {
                entity_type: "Prompt".to_string(),
                id: id.map(|i| i.to_string()).unwrap_or_default(),
            },
            StatusCode::BAD_REQUEST if message.starts_with(INVALID_ID_PREFIX) => {
                DomainError::InvalidId(message)
            }
            StatusCode::BAD_REQUEST => DomainError::Validation(message),
            StatusCode::BAD_GATEWAY => DomainError::Upstream(message),
            _ => DomainError::StoreUnavailable(message),
        }
    }

    fn transport(e: reqwest::Error) -> DomainError {
        DomainError::StoreUnavailable(e.to_string())
    }
}

#[async_trait]
impl RecordBackend for ApiClient {
    async fn create(&self, draft: &PromptDraft) -> Result<PromptRecord, DomainError> {
        let resp = self
            .client
            .post(self.url("/prompts/save"))
            .json(draft)
            .send()
            .await
            .map_err(Self::transport)?;

        if !resp.status().is_success() {
            return Err(Self::record_error(resp, None).await);
        }

        let envelope: DataEnvelope = resp.json().await.map_err(Self::transport)?;
        Ok(envelope.data)
    }

    async fn update(&self, id: Uuid, draft: &PromptDraft) -> Result<PromptRecord, DomainError> {
        let resp = self
            .client
            .put(self.url(&format!("/prompts/{id}")))
            .json(draft)
            .send()
            .await
            .map_err(Self::transport)?;

        if !resp.status().is_success() {
            return Err(Self::record_error(resp, Some(id)).await);
        }

        let envelope: DataEnvelope = resp.json().await.map_err(Self::transport)?;
        Ok(envelope.data)
    }

    async fn delete(&self, id: Uuid) -> Result<PromptRecord, DomainError> {
        let resp = self
            .client
            .delete(self.url(&format!("/prompts/{id}")))
            .send()
            .await
            .map_err(Self::transport)?;

        if !resp.status().is_success() {
            return Err(Self::record_error(resp, Some(id)).await);
        }

        let envelope: DataEnvelope = resp.json().await.map_err(Self::transport)?;
        Ok(envelope.data)
    }

    async fn get(&self, id: Uuid) -> Result<PromptRecord, DomainError> {
        let resp = self
            .client
            .get(self.url(&format!("/prompts/{id}")))
            .send()
            .await
            .map_err(Self::transport)?;

        if !resp.status().is_success() {
            return Err(Self::record_error(resp, Some(id)).await);
        }

        let envelope: DataEnvelope = resp.json().await.map_err(Self::transport)?;
        Ok(envelope.data)
    }

    async fn list(&self) -> Result<Vec<PromptRecord>, DomainError> {
        let resp = self
            .client
            .get(self.url("/prompts"))
            .send()
            .await
            .map_err(Self::transport)?;

        if !resp.status().is_success() {
            return Err(Self::record_error(resp, None).await);
        }

        let envelope: ListEnvelope = resp.json().await.map_err(Self::transport)?;
        Ok(envelope.data)
    }
}
