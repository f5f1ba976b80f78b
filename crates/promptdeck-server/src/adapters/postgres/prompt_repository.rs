//! PostgreSQL implementation of PromptRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use promptdeck::{DomainError, PromptRecord, PromptRepository, PromptSections};

/// PostgreSQL implementation of PromptRepository
pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct PromptRow {
    id: Uuid,
    title: String,
    instructions: String,
    context: String,
    input_data: String,
    output_indicator: String,
    negative_prompting: String,
    combined_prompt: String,
    response: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<PromptRow> for PromptRecord {
    fn from(row: PromptRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            sections: PromptSections {
                instructions: row.instructions,
                context: row.context,
                input_data: row.input_data,
                output_indicator: row.output_indicator,
                negative_prompting: row.negative_prompting,
            },
            combined_prompt: row.combined_prompt,
            response: row.response,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl PromptRepository for PgPromptRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PromptRecord>, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>("SELECT * FROM prompts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<PromptRecord>, DomainError> {
        let rows = sqlx::query_as::<_, PromptRow>(
            "SELECT * FROM prompts ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, record: &PromptRecord) -> Result<PromptRecord, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>(
            r#"
            INSERT INTO prompts (
                id, title, instructions, context, input_data,
                output_indicator, negative_prompting, combined_prompt,
                response, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.sections.instructions)
        .bind(&record.sections.context)
        .bind(&record.sections.input_data)
        .bind(&record.sections.output_indicator)
        .bind(&record.sections.negative_prompting)
        .bind(&record.combined_prompt)
        .bind(&record.response)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        Ok(row.into())
    }

    async fn update(&self, record: &PromptRecord) -> Result<Option<PromptRecord>, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>(
            r#"
            UPDATE prompts
            SET title = $2, instructions = $3, context = $4, input_data = $5,
                output_indicator = $6, negative_prompting = $7,
                combined_prompt = $8, response = $9, updated_at = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.sections.instructions)
        .bind(&record.sections.context)
        .bind(&record.sections.input_data)
        .bind(&record.sections.output_indicator)
        .bind(&record.sections.negative_prompting)
        .bind(&record.combined_prompt)
        .bind(&record.response)
        .bind(record.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<PromptRecord>, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>("DELETE FROM prompts WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}
