//! Prompt Application Service (Use Case)
//!
//! Orchestrates the record lifecycle: create, list, get, update, delete.

use std::sync::Arc;
use uuid::Uuid;

use promptdeck::{DomainError, PromptDraft, PromptRecord, PromptRepository};

/// list() never returns more than this many records
pub const LIST_LIMIT: i64 = 50;

/// Application service for prompt record operations
pub struct PromptService<R: PromptRepository> {
    repo: Arc<R>,
}

impl<R: PromptRepository> PromptService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a new record; assigns id and timestamps.
    pub async fn create(&self, draft: PromptDraft) -> Result<PromptRecord, DomainError> {
        draft.validate()?;
        let record = PromptRecord::new(draft);
        let saved = self.repo.insert(&record).await?;

        tracing::info!("Saved prompt: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Most recent records, newest first, capped at 50.
    pub async fn list(&self) -> Result<Vec<PromptRecord>, DomainError> {
        self.repo.find_recent(LIST_LIMIT).await
    }

    /// Fetch a single record by ID.
    pub async fn get(&self, id: Uuid) -> Result<PromptRecord, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))
    }

    /// Full replace of all mutable fields; `created_at` is untouched and
    /// `updated_at` refreshed.
    pub async fn update(&self, id: Uuid, draft: PromptDraft) -> Result<PromptRecord, DomainError> {
        draft.validate()?;

        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        let updated = current.apply(draft);
        self.repo
            .update(&updated)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))
    }

    /// Remove a record, returning it as confirmation.
    pub async fn delete(&self, id: Uuid) -> Result<PromptRecord, DomainError> {
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        tracing::info!("Deleted prompt: {}", id);

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use promptdeck::PromptSections;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPromptRepository {
        records: Mutex<HashMap<Uuid, PromptRecord>>,
    }

    #[async_trait]
    impl PromptRepository for InMemoryPromptRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<PromptRecord>, DomainError> {
            Ok(self.records.lock().unwrap().get(&id).cloned())
        }

        async fn find_recent(&self, limit: i64) -> Result<Vec<PromptRecord>, DomainError> {
            let mut records: Vec<_> = self.records.lock().unwrap().values().cloned().collect();
            records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            records.truncate(limit as usize);
            Ok(records)
        }

        async fn insert(&self, record: &PromptRecord) -> Result<PromptRecord, DomainError> {
            self.records
                .lock()
                .unwrap()
                .insert(record.id, record.clone());
            Ok(record.clone())
        }

        async fn update(
            &self,
            record: &PromptRecord,
        ) -> Result<Option<PromptRecord>, DomainError> {
            let mut records = self.records.lock().unwrap();
            if !records.contains_key(&record.id) {
                return Ok(None);
            }
            records.insert(record.id, record.clone());
            Ok(Some(record.clone()))
        }

        async fn delete(&self, id: Uuid) -> Result<Option<PromptRecord>, DomainError> {
            Ok(self.records.lock().unwrap().remove(&id))
        }
    }

    fn service() -> PromptService<InMemoryPromptRepository> {
        PromptService::new(Arc::new(InMemoryPromptRepository::default()))
    }

    fn draft(title: &str, instructions: &str) -> PromptDraft {
        PromptDraft {
            title: title.to_string(),
            sections: PromptSections {
                instructions: instructions.to_string(),
                ..Default::default()
            },
            combined_prompt: format!("Instructions:\n{instructions}"),
            response: String::new(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let svc = service();
        let input = draft("Greeting", "Say hello");

        let created = svc.create(input.clone()).await.unwrap();
        let fetched = svc.get(created.id).await.unwrap();

        assert_eq!(fetched.title, input.title);
        assert_eq!(fetched.sections, input.sections);
        assert_eq!(fetched.combined_prompt, input.combined_prompt);
        assert_eq!(fetched.created_at, created.created_at);
        assert_eq!(fetched.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn create_rejects_missing_required_fields() {
        let svc = service();

        let no_title = PromptDraft {
            combined_prompt: "Instructions:\nx".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            svc.create(no_title).await,
            Err(DomainError::Validation(_))
        ));

        let no_prompt = PromptDraft {
            title: "Greeting".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            svc.create(no_prompt).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn update_preserves_created_at_and_advances_updated_at() {
        let svc = service();
        let created = svc.create(draft("Greeting", "Say hello")).await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let updated = svc
            .update(created.id, draft("Greeting", "Say hello twice"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.sections.instructions, "Say hello twice");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let svc = service();
        let result = svc.update(Uuid::new_v4(), draft("Greeting", "hi")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let created = svc.create(draft("Greeting", "Say hello")).await.unwrap();

        let deleted = svc.delete(created.id).await.unwrap();
        assert_eq!(deleted.id, created.id);

        assert!(matches!(
            svc.get(created.id).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            svc.delete(created.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn list_caps_at_fifty_newest_first() {
        let repo = Arc::new(InMemoryPromptRepository::default());
        let svc = PromptService::new(repo.clone());

        let base = Utc::now();
        for i in 0..55 {
            let mut record = PromptRecord::new(draft(&format!("p{i}"), "x"));
            record.created_at = base + Duration::seconds(i);
            record.updated_at = record.created_at;
            repo.insert(&record).await.unwrap();
        }

        let listed = svc.list().await.unwrap();
        assert_eq!(listed.len(), 50);
        assert_eq!(listed[0].title, "p54");
        assert!(listed
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[tokio::test]
    async fn list_is_empty_when_no_records() {
        let svc = service();
        assert!(svc.list().await.unwrap().is_empty());
    }
}
