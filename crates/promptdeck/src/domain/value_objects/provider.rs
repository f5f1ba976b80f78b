//! Provider - LLM Provider types

use serde::{Deserialize, Serialize};

/// Models served by a local Ollama instance.
pub const OLLAMA_MODELS: &[&str] = &["llama2", "codellama", "mistral", "phi"];

/// LLM Provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAI,
    Anthropic,
    Ollama,
}

impl Provider {
    /// Route a model name to its provider. `gpt*` goes to OpenAI,
    /// `claude*` to Anthropic, and the known local models to Ollama.
    /// Anything else is unsupported.
    pub fn for_model(model: &str) -> Option<Provider> {
        if model.starts_with("gpt") {
            Some(Provider::OpenAI)
        } else if model.starts_with("claude") {
            Some(Provider::Anthropic)
        } else if OLLAMA_MODELS.contains(&model) {
            Some(Provider::Ollama)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::OpenAI => write!(f, "openai"),
            Provider::Anthropic => write!(f, "anthropic"),
            Provider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAI),
            "anthropic" | "claude" => Ok(Provider::Anthropic),
            "ollama" => Ok(Provider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_model_name() {
        assert_eq!(Provider::for_model("gpt-4"), Some(Provider::OpenAI));
        assert_eq!(
            Provider::for_model("claude-3-sonnet"),
            Some(Provider::Anthropic)
        );
        assert_eq!(Provider::for_model("mistral"), Some(Provider::Ollama));
        assert_eq!(Provider::for_model("palm-2"), None);
    }
}
