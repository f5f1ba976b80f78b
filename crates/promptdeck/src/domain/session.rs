//! Session - Save/Load/Delete State Machine
//!
//! Tracks whether the current form content is a fresh draft or bound to
//! a stored record, and decides which backend call a save issues. The
//! binding is an explicit tagged state rather than a nullable ID: `New`
//! has nothing bound, `Loaded` carries the bound ID. There is no
//! clean/dirty distinction; any save while an ID is bound is an update.

use uuid::Uuid;

use crate::domain::composer::compose;
use crate::domain::entities::{PromptDraft, PromptRecord, PromptSections};
use crate::domain::errors::DomainError;
use crate::ports::services::RecordBackend;

/// Which record, if any, the form is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    New,
    Loaded { id: Uuid },
}

/// Result of a save action.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Rejected locally, no backend call was made
    RejectedEmpty,
    Created(PromptRecord),
    Updated(PromptRecord),
}

/// An editing session over the structured prompt form.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub title: String,
    pub sections: PromptSections,
    pub response: String,
    state: Option<Uuid>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match self.state {
            Some(id) => SessionState::Loaded { id },
            None => SessionState::New,
        }
    }

    /// The combined prompt for the current sections, recomputed on demand.
    pub fn combined_prompt(&self) -> String {
        compose(&self.sections)
    }

    /// Snapshot of the form as a draft ready to send.
    pub fn draft(&self) -> PromptDraft {
        PromptDraft {
            title: self.title.clone(),
            sections: self.sections.clone(),
            combined_prompt: self.combined_prompt(),
            response: self.response.clone(),
        }
    }

    /// Save the current form. Rejected locally when the title or the
    /// combined prompt is empty. In `New` this creates and binds the
    /// returned ID; in `Loaded` it updates the bound record in place.
    pub async fn save<B: RecordBackend>(
        &mut self,
        backend: &B,
    ) -> Result<SaveOutcome, DomainError> {
        let draft = self.draft();
        if draft.title.trim().is_empty() || draft.combined_prompt.is_empty() {
            return Ok(SaveOutcome::RejectedEmpty);
        }

        match self.state {
            None => {
                let record = backend.create(&draft).await?;
                self.state = Some(record.id);
                Ok(SaveOutcome::Created(record))
            }
            Some(id) => {
                let record = backend.update(id, &draft).await?;
                Ok(SaveOutcome::Updated(record))
            }
        }
    }

    /// Replay a stored record into the form and bind its ID.
    pub fn load(&mut self, record: &PromptRecord) {
        self.title = record.title.clone();
        self.sections = record.sections.clone();
        self.response = record.response.clone();
        self.state = Some(record.id);
    }

    /// Delete the bound record. In `New` there is nothing bound and no
    /// call is made. On success the form is cleared.
    pub async fn delete<B: RecordBackend>(
        &mut self,
        backend: &B,
    ) -> Result<Option<PromptRecord>, DomainError> {
        let Some(id) = self.state else {
            return Ok(None);
        };

        let deleted = backend.delete(id).await?;
        self.clear();
        Ok(Some(deleted))
    }

    /// Explicit new/clear action: drop all fields and any binding.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory backend that records which calls were made.
    #[derive(Default)]
    struct FakeBackend {
        records: Mutex<HashMap<Uuid, PromptRecord>>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl FakeBackend {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecordBackend for FakeBackend {
        async fn create(&self, draft: &PromptDraft) -> Result<PromptRecord, DomainError> {
            self.calls.lock().unwrap().push("create");
            draft.validate()?;
            let record = PromptRecord::new(draft.clone());
            self.records
                .lock()
                .unwrap()
                .insert(record.id, record.clone());
            Ok(record)
        }

        async fn update(&self, id: Uuid, draft: &PromptDraft) -> Result<PromptRecord, DomainError> {
            self.calls.lock().unwrap().push("update");
            draft.validate()?;
            let mut records = self.records.lock().unwrap();
            let current = records
                .get(&id)
                .ok_or_else(|| DomainError::not_found("PromptRecord", id))?;
            let updated = current.apply(draft.clone());
            records.insert(id, updated.clone());
            Ok(updated)
        }

        async fn delete(&self, id: Uuid) -> Result<PromptRecord, DomainError> {
            self.calls.lock().unwrap().push("delete");
            self.records
                .lock()
                .unwrap()
                .remove(&id)
                .ok_or_else(|| DomainError::not_found("PromptRecord", id))
        }

        async fn get(&self, id: Uuid) -> Result<PromptRecord, DomainError> {
            self.calls.lock().unwrap().push("get");
            self.records
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or_else(|| DomainError::not_found("PromptRecord", id))
        }

        async fn list(&self) -> Result<Vec<PromptRecord>, DomainError> {
            self.calls.lock().unwrap().push("list");
            let mut records: Vec<_> = self.records.lock().unwrap().values().cloned().collect();
            records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(records)
        }
    }

    fn filled_session() -> Session {
        let mut session = Session::new();
        session.title = "Greeting".to_string();
        session.sections.instructions = "Say hello".to_string();
        session
    }

    #[tokio::test]
    async fn save_with_empty_title_makes_no_call() {
        let backend = FakeBackend::default();
        let mut session = Session::new();
        session.sections.instructions = "Say hello".to_string();

        let outcome = session.save(&backend).await.unwrap();
        assert_eq!(outcome, SaveOutcome::RejectedEmpty);
        assert!(backend.calls().is_empty());
        assert_eq!(session.state(), SessionState::New);
    }

    #[tokio::test]
    async fn save_with_empty_prompt_makes_no_call() {
        let backend = FakeBackend::default();
        let mut session = Session::new();
        session.title = "Greeting".to_string();

        let outcome = session.save(&backend).await.unwrap();
        assert_eq!(outcome, SaveOutcome::RejectedEmpty);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn first_save_creates_and_binds() {
        let backend = FakeBackend::default();
        let mut session = filled_session();

        let outcome = session.save(&backend).await.unwrap();
        let SaveOutcome::Created(record) = outcome else {
            panic!("expected create");
        };
        assert_eq!(record.combined_prompt, "Instructions:\nSay hello");
        assert_eq!(session.state(), SessionState::Loaded { id: record.id });
        assert_eq!(backend.calls(), vec!["create"]);
    }

    #[tokio::test]
    async fn second_save_updates_same_id() {
        let backend = FakeBackend::default();
        let mut session = filled_session();

        session.save(&backend).await.unwrap();
        let SessionState::Loaded { id } = session.state() else {
            panic!("expected loaded");
        };

        session.sections.context = "Be friendly".to_string();
        let outcome = session.save(&backend).await.unwrap();
        let SaveOutcome::Updated(record) = outcome else {
            panic!("expected update");
        };
        assert_eq!(record.id, id);
        assert_eq!(session.state(), SessionState::Loaded { id });
        assert_eq!(backend.calls(), vec!["create", "update"]);
    }

    #[tokio::test]
    async fn load_replays_fields_and_binds() {
        let backend = FakeBackend::default();
        let mut first = filled_session();
        first.response = "Hello!".to_string();
        first.save(&backend).await.unwrap();

        let listed = backend.list().await.unwrap();
        let mut session = Session::new();
        session.load(&listed[0]);

        assert_eq!(session.title, "Greeting");
        assert_eq!(session.sections.instructions, "Say hello");
        assert_eq!(session.response, "Hello!");
        assert_eq!(session.combined_prompt(), "Instructions:\nSay hello");
        assert_eq!(session.state(), SessionState::Loaded { id: listed[0].id });
    }

    #[tokio::test]
    async fn delete_clears_to_new() {
        let backend = FakeBackend::default();
        let mut session = filled_session();
        session.save(&backend).await.unwrap();

        let deleted = session.delete(&backend).await.unwrap();
        assert!(deleted.is_some());
        assert_eq!(session.state(), SessionState::New);
        assert!(session.title.is_empty());
        assert!(session.sections.is_empty());
    }

    #[tokio::test]
    async fn delete_in_new_makes_no_call() {
        let backend = FakeBackend::default();
        let mut session = filled_session();

        let deleted = session.delete(&backend).await.unwrap();
        assert!(deleted.is_none());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn clear_drops_binding() {
        let backend = FakeBackend::default();
        let mut session = filled_session();
        session.save(&backend).await.unwrap();

        session.clear();
        assert_eq!(session.state(), SessionState::New);

        // A save after clear creates a fresh record
        session.title = "Another".to_string();
        session.sections.instructions = "Say goodbye".to_string();
        let outcome = session.save(&backend).await.unwrap();
        assert!(matches!(outcome, SaveOutcome::Created(_)));
    }
}
