//! Prompt Repository Port
//!
//! Abstract interface for prompt record persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, PromptRecord};

/// Repository interface for prompt records
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Find a record by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PromptRecord>, DomainError>;

    /// Find the most recent records, newest first, up to `limit`
    async fn find_recent(&self, limit: i64) -> Result<Vec<PromptRecord>, DomainError>;

    /// Insert a new record
    async fn insert(&self, record: &PromptRecord) -> Result<PromptRecord, DomainError>;

    /// Replace an existing record in place; `None` if the ID is unknown
    async fn update(&self, record: &PromptRecord) -> Result<Option<PromptRecord>, DomainError>;

    /// Delete a record, returning it as confirmation; `None` if absent
    async fn delete(&self, id: Uuid) -> Result<Option<PromptRecord>, DomainError>;
}
