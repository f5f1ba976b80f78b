//! Preferences - Model, Endpoint, and Credential Configuration
//!
//! A singleton record: each save overwrites the previous value wholesale.
//! API keys supplied through the environment take precedence over stored
//! values and are never written back to the store.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

pub const MAX_TOKENS_RANGE: std::ops::RangeInclusive<i32> = 1..=8192;
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

/// Preferences - per-deployment configuration for model choice,
/// endpoints, and credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub claude_api_key: Option<String>,
    #[serde(default = "default_ollama_endpoint")]
    pub ollama_endpoint: String,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> i32 {
    2048
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            claude_api_key: None,
            ollama_endpoint: default_ollama_endpoint(),
            default_model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl Preferences {
    /// Validate numeric bounds before a save.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !MAX_TOKENS_RANGE.contains(&self.max_tokens) {
            return Err(DomainError::validation(format!(
                "max_tokens must be between {} and {}",
                MAX_TOKENS_RANGE.start(),
                MAX_TOKENS_RANGE.end()
            )));
        }
        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(DomainError::validation(format!(
                "temperature must be between {} and {}",
                TEMPERATURE_RANGE.start(),
                TEMPERATURE_RANGE.end()
            )));
        }
        Ok(())
    }

    /// Mask an API key for display: `***` plus the last four characters.
    pub fn mask_key(key: &str) -> String {
        let tail: String = key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("***{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_rejected() {
        let mut prefs = Preferences::default();
        prefs.max_tokens = 0;
        assert!(prefs.validate().is_err());

        prefs.max_tokens = 8193;
        assert!(prefs.validate().is_err());

        prefs.max_tokens = 8192;
        prefs.temperature = 2.5;
        assert!(prefs.validate().is_err());

        prefs.temperature = 0.0;
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn mask_shows_last_four() {
        assert_eq!(Preferences::mask_key("sk-abcdef1234"), "***1234");
        assert_eq!(Preferences::mask_key("abc"), "***abc");
    }
}
