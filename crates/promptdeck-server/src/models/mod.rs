//! Promptdeck API Models
//!
//! Request/response DTOs with OpenAPI schemas.
//! - Prompt: record CRUD envelopes
//! - Preferences: masked views and update payloads
//! - Llm: proxy requests, responses, and call history

mod llm;
mod preferences;
mod prompt;

pub use llm::*;
pub use preferences::*;
pub use prompt::*;

use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope shared by all routes
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
