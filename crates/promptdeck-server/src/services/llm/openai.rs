//! OpenAI chat completions client

use reqwest::Client;
use serde::{Deserialize, Serialize};

use promptdeck::{DomainError, GenerationRequest};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: i32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

pub async fn generate(
    http: &Client,
    api_key: &str,
    request: &GenerationRequest,
) -> Result<String, DomainError> {
    let body = ChatRequest {
        model: &request.model,
        messages: vec![ChatMessage {
            role: "user",
            content: &request.prompt,
        }],
        max_tokens: request.max_tokens,
        temperature: request.temperature,
    };

    let response = http
        .post(OPENAI_API_URL)
        .header("Authorization", format!("Bearer {api_key}"))
        .json(&body)
        .send()
        .await
        .map_err(|e| DomainError::Upstream(format!("OpenAI API error: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(DomainError::Upstream(format!(
            "OpenAI API error ({status}): {text}"
        )));
    }

    let parsed: ChatResponse = response
        .json()
        .await
        .map_err(|e| DomainError::Upstream(format!("OpenAI API error: {e}")))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| DomainError::Upstream("OpenAI API returned no completion".to_string()))
}
