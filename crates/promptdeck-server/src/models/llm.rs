//! LLM proxy DTOs and call history entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for POST /prompt/simple
#[derive(Debug, Deserialize, ToSchema)]
pub struct SimplePromptRequest {
    pub prompt: String,
    /// Overrides the stored default model when present
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<i32>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

/// Response for POST /prompt/simple
#[derive(Debug, Serialize, ToSchema)]
pub struct SimplePromptResponse {
    pub response: String,
}

/// Body for POST /prompt/chain-of-thought
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChainOfThoughtRequest {
    pub problem: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<i32>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

/// Response for POST /prompt/chain-of-thought
#[derive(Debug, Serialize, ToSchema)]
pub struct ChainOfThoughtResponse {
    pub steps: Vec<String>,
    pub final_answer: String,
    pub reasoning_process: String,
}

/// One logged pipeline invocation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CallLogEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: DateTime<Utc>,
    #[schema(value_type = Object)]
    pub input: serde_json::Value,
    #[schema(value_type = Object)]
    pub output: serde_json::Value,
    pub success: bool,
}

/// Envelope for GET /history
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub history: Vec<CallLogEntry>,
}

/// Envelope for GET /models
#[derive(Debug, Serialize, ToSchema)]
pub struct ModelsResponse {
    pub openai: Vec<String>,
    pub claude: Vec<String>,
    pub ollama: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_log_entry_serializes_kind_as_type() {
        let entry = CallLogEntry {
            id: "simple_0".to_string(),
            kind: "simple".to_string(),
            timestamp: Utc::now(),
            input: serde_json::json!({ "prompt": "hi" }),
            output: serde_json::json!({ "response": "hello" }),
            success: true,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "simple");
        assert!(value.get("kind").is_none());
    }
}
