//! Record Backend Port
//!
//! Abstract interface a client session uses to reach the record store.
//! The HTTP API client implements this; tests substitute an in-memory
//! fake so the session transition logic runs without the network.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, PromptDraft, PromptRecord};

/// Client-side interface over the record service
#[async_trait]
pub trait RecordBackend: Send + Sync {
    /// Create a new record; the returned record carries the assigned ID
    async fn create(&self, draft: &PromptDraft) -> Result<PromptRecord, DomainError>;

    /// Replace the record bound to `id`
    async fn update(&self, id: Uuid, draft: &PromptDraft) -> Result<PromptRecord, DomainError>;

    /// Delete the record bound to `id`, returning it as confirmation
    async fn delete(&self, id: Uuid) -> Result<PromptRecord, DomainError>;

    /// Fetch a single record
    async fn get(&self, id: Uuid) -> Result<PromptRecord, DomainError>;

    /// Fetch the most recent records, newest first
    async fn list(&self) -> Result<Vec<PromptRecord>, DomainError>;
}
