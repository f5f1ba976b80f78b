//! Anthropic messages client

use reqwest::Client;
use serde::{Deserialize, Serialize};

use promptdeck::{DomainError, GenerationRequest};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: i32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

pub async fn generate(
    http: &Client,
    api_key: &str,
    request: &GenerationRequest,
) -> Result<String, DomainError> {
    let body = MessagesRequest {
        model: &request.model,
        max_tokens: request.max_tokens,
        temperature: request.temperature,
        messages: vec![Message {
            role: "user",
            content: &request.prompt,
        }],
    };

    let response = http
        .post(ANTHROPIC_API_URL)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&body)
        .send()
        .await
        .map_err(|e| DomainError::Upstream(format!("Claude API error: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(DomainError::Upstream(format!(
            "Claude API error ({status}): {text}"
        )));
    }

    let parsed: MessagesResponse = response
        .json()
        .await
        .map_err(|e| DomainError::Upstream(format!("Claude API error: {e}")))?;

    parsed
        .content
        .into_iter()
        .next()
        .map(|block| block.text)
        .ok_or_else(|| DomainError::Upstream("Claude API returned no content".to_string()))
}
