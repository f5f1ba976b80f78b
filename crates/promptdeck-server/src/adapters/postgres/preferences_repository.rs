//! PostgreSQL implementation of PreferencesRepository
//!
//! The table holds a single row (id = 1); saves upsert it.

use async_trait::async_trait;
use sqlx::PgPool;

use promptdeck::{DomainError, Preferences, PreferencesRepository};

/// PostgreSQL implementation of PreferencesRepository
pub struct PgPreferencesRepository {
    pool: PgPool,
}

impl PgPreferencesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PreferencesRow {
    openai_api_key: Option<String>,
    claude_api_key: Option<String>,
    ollama_endpoint: String,
    default_model: String,
    max_tokens: i32,
    temperature: f32,
}

impl From<PreferencesRow> for Preferences {
    fn from(row: PreferencesRow) -> Self {
        Self {
            openai_api_key: row.openai_api_key,
            claude_api_key: row.claude_api_key,
            ollama_endpoint: row.ollama_endpoint,
            default_model: row.default_model,
            max_tokens: row.max_tokens,
            temperature: row.temperature,
        }
    }
}

#[async_trait]
impl PreferencesRepository for PgPreferencesRepository {
    async fn load(&self) -> Result<Option<Preferences>, DomainError> {
        let row =
            sqlx::query_as::<_, PreferencesRow>("SELECT * FROM preferences WHERE id = 1")
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, preferences: &Preferences) -> Result<Preferences, DomainError> {
        let row = sqlx::query_as::<_, PreferencesRow>(
            r#"
            INSERT INTO preferences (
                id, openai_api_key, claude_api_key, ollama_endpoint,
                default_model, max_tokens, temperature, updated_at
            )
            VALUES (1, $1, $2, $3, $4, $5, $6, NOW())
            ON CONFLICT (id) DO UPDATE
            SET openai_api_key = $1, claude_api_key = $2, ollama_endpoint = $3,
                default_model = $4, max_tokens = $5, temperature = $6,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(&preferences.openai_api_key)
        .bind(&preferences.claude_api_key)
        .bind(&preferences.ollama_endpoint)
        .bind(&preferences.default_model)
        .bind(preferences.max_tokens)
        .bind(preferences.temperature)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        Ok(row.into())
    }
}
