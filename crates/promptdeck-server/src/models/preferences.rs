//! Preferences DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use promptdeck::Preferences;

/// Preferences as returned by GET /preferences. Stored API keys are
/// masked to `***` plus their last four characters; they are never
/// echoed in full.
#[derive(Debug, Serialize, ToSchema)]
pub struct PreferencesView {
    pub openai_api_key: Option<String>,
    pub claude_api_key: Option<String>,
    pub ollama_endpoint: String,
    pub default_model: String,
    pub max_tokens: i32,
    pub temperature: f32,
}

impl From<Preferences> for PreferencesView {
    fn from(prefs: Preferences) -> Self {
        Self {
            openai_api_key: prefs.openai_api_key.as_deref().map(Preferences::mask_key),
            claude_api_key: prefs.claude_api_key.as_deref().map(Preferences::mask_key),
            ollama_endpoint: prefs.ollama_endpoint,
            default_model: prefs.default_model,
            max_tokens: prefs.max_tokens,
            temperature: prefs.temperature,
        }
    }
}

/// Body for POST /preferences; overwrites the stored row wholesale.
/// Omitted fields fall back to the defaults.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePreferencesRequest {
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub claude_api_key: Option<String>,
    #[serde(default)]
    pub ollama_endpoint: Option<String>,
    #[serde(default)]
    pub default_model: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<i32>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl From<UpdatePreferencesRequest> for Preferences {
    fn from(req: UpdatePreferencesRequest) -> Self {
        let defaults = Preferences::default();
        Self {
            openai_api_key: req.openai_api_key.filter(|k| !k.is_empty()),
            claude_api_key: req.claude_api_key.filter(|k| !k.is_empty()),
            ollama_endpoint: req.ollama_endpoint.unwrap_or(defaults.ollama_endpoint),
            default_model: req.default_model.unwrap_or(defaults.default_model),
            max_tokens: req.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: req.temperature.unwrap_or(defaults.temperature),
        }
    }
}

/// Simple acknowledgement
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
