//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use uuid::Uuid;

/// Leading text of the `InvalidId` display form. Clients that only see
/// the error string use it to tell a malformed-id rejection apart from
/// other 400s.
pub const INVALID_ID_PREFIX: &str = "Invalid identifier";

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{}: {0}", INVALID_ID_PREFIX)]
    InvalidId(String),

    #[error("Upstream provider error: {0}")]
    Upstream(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_id_display_carries_the_shared_prefix() {
        let err = DomainError::InvalidId("not-a-uuid".to_string());
        assert!(err.to_string().starts_with(INVALID_ID_PREFIX));

        let other = DomainError::validation("missing title");
        assert!(!other.to_string().starts_with(INVALID_ID_PREFIX));
    }
}
