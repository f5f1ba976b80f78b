//! Preferences Repository Port
//!
//! Abstract interface for the singleton preferences record.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Preferences};

/// Repository interface for the preferences singleton
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Load stored preferences, if any have been saved
    async fn load(&self) -> Result<Option<Preferences>, DomainError>;

    /// Overwrite the stored preferences wholesale
    async fn save(&self, preferences: &Preferences) -> Result<Preferences, DomainError>;
}
