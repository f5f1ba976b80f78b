//! Preferences Application Service
//!
//! Loads and saves the singleton preferences record. Values supplied
//! through the environment take precedence over stored ones and are
//! never written back to the store.

use std::sync::Arc;

use promptdeck::{DomainError, Preferences, PreferencesRepository};

/// Environment-supplied preference overrides, captured at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub openai_api_key: Option<String>,
    pub claude_api_key: Option<String>,
    pub ollama_endpoint: Option<String>,
    pub default_model: Option<String>,
    pub max_tokens: Option<i32>,
    pub temperature: Option<f32>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok().filter(|v| !v.is_empty()),
            claude_api_key: std::env::var("CLAUDE_API_KEY").ok().filter(|v| !v.is_empty()),
            ollama_endpoint: std::env::var("OLLAMA_ENDPOINT").ok().filter(|v| !v.is_empty()),
            default_model: std::env::var("DEFAULT_MODEL").ok().filter(|v| !v.is_empty()),
            max_tokens: std::env::var("MAX_TOKENS").ok().and_then(|v| v.parse().ok()),
            temperature: std::env::var("TEMPERATURE").ok().and_then(|v| v.parse().ok()),
        }
    }

    fn apply(&self, stored: Preferences) -> Preferences {
        Preferences {
            openai_api_key: self.openai_api_key.clone().or(stored.openai_api_key),
            claude_api_key: self.claude_api_key.clone().or(stored.claude_api_key),
            ollama_endpoint: self
                .ollama_endpoint
                .clone()
                .unwrap_or(stored.ollama_endpoint),
            default_model: self.default_model.clone().unwrap_or(stored.default_model),
            max_tokens: self.max_tokens.unwrap_or(stored.max_tokens),
            temperature: self.temperature.unwrap_or(stored.temperature),
        }
    }
}

/// Application service for the preferences singleton
pub struct PreferencesService<R: PreferencesRepository> {
    repo: Arc<R>,
    overrides: EnvOverrides,
}

impl<R: PreferencesRepository> PreferencesService<R> {
    pub fn new(repo: Arc<R>, overrides: EnvOverrides) -> Self {
        Self { repo, overrides }
    }

    /// Effective preferences: stored values (or defaults when nothing
    /// has been saved) with environment overrides applied on top.
    pub async fn current(&self) -> Result<Preferences, DomainError> {
        let stored = self.repo.load().await?.unwrap_or_default();
        Ok(self.overrides.apply(stored))
    }

    /// Overwrite the stored preferences wholesale. Environment overrides
    /// are not persisted; they keep winning on subsequent reads.
    pub async fn save(&self, preferences: Preferences) -> Result<Preferences, DomainError> {
        preferences.validate()?;
        let saved = self.repo.save(&preferences).await?;

        tracing::info!("Preferences updated (model: {})", saved.default_model);

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPreferencesRepository {
        stored: Mutex<Option<Preferences>>,
    }

    #[async_trait]
    impl PreferencesRepository for InMemoryPreferencesRepository {
        async fn load(&self) -> Result<Option<Preferences>, DomainError> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, preferences: &Preferences) -> Result<Preferences, DomainError> {
            *self.stored.lock().unwrap() = Some(preferences.clone());
            Ok(preferences.clone())
        }
    }

    #[tokio::test]
    async fn defaults_when_nothing_stored() {
        let svc = PreferencesService::new(
            Arc::new(InMemoryPreferencesRepository::default()),
            EnvOverrides::default(),
        );

        let prefs = svc.current().await.unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[tokio::test]
    async fn env_overrides_win_and_survive_save() {
        let repo = Arc::new(InMemoryPreferencesRepository::default());
        let overrides = EnvOverrides {
            openai_api_key: Some("sk-env-key".to_string()),
            default_model: Some("gpt-4".to_string()),
            ..Default::default()
        };
        let svc = PreferencesService::new(repo.clone(), overrides);

        let mut incoming = Preferences::default();
        incoming.openai_api_key = Some("sk-stored-key".to_string());
        incoming.default_model = "claude-3-haiku".to_string();
        svc.save(incoming).await.unwrap();

        // Env values win on read
        let current = svc.current().await.unwrap();
        assert_eq!(current.openai_api_key.as_deref(), Some("sk-env-key"));
        assert_eq!(current.default_model, "gpt-4");

        // ... and were never written into the store
        let stored = repo.load().await.unwrap().unwrap();
        assert_eq!(stored.openai_api_key.as_deref(), Some("sk-stored-key"));
        assert_eq!(stored.default_model, "claude-3-haiku");
    }

    #[tokio::test]
    async fn save_overwrites_wholesale() {
        let svc = PreferencesService::new(
            Arc::new(InMemoryPreferencesRepository::default()),
            EnvOverrides::default(),
        );

        let mut first = Preferences::default();
        first.claude_api_key = Some("sk-claude".to_string());
        svc.save(first).await.unwrap();

        // A second save without the key drops it; no merge with history
        svc.save(Preferences::default()).await.unwrap();
        let current = svc.current().await.unwrap();
        assert_eq!(current.claude_api_key, None);
    }

    #[tokio::test]
    async fn save_rejects_out_of_range_values() {
        let svc = PreferencesService::new(
            Arc::new(InMemoryPreferencesRepository::default()),
            EnvOverrides::default(),
        );

        let mut prefs = Preferences::default();
        prefs.temperature = 3.0;
        assert!(matches!(
            svc.save(prefs).await,
            Err(DomainError::Validation(_))
        ));
    }
}
