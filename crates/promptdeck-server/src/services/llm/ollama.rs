//! Ollama local generation client

use reqwest::Client;
use serde::{Deserialize, Serialize};

use promptdeck::{DomainError, GenerationRequest};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    num_predict: i32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

pub async fn generate(
    http: &Client,
    endpoint: &str,
    request: &GenerationRequest,
) -> Result<String, DomainError> {
    let url = format!("{}/api/generate", endpoint.trim_end_matches('/'));
    let body = GenerateRequest {
        model: &request.model,
        prompt: &request.prompt,
        stream: false,
        options: GenerateOptions {
            num_predict: request.max_tokens,
            temperature: request.temperature,
        },
    };

    let response = http
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| DomainError::Upstream(format!("Ollama API error: {e}")))?;

    if !response.status().is_success() {
        return Err(DomainError::Upstream(format!(
            "Ollama API returned status {}",
            response.status()
        )));
    }

    let parsed: GenerateResponse = response
        .json()
        .await
        .map_err(|e| DomainError::Upstream(format!("Ollama API error: {e}")))?;

    Ok(parsed.response)
}
