//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - PromptRecord: persisted prompt with structured sections and response
//! - Preferences: per-deployment model/endpoint/credential configuration

mod preferences;
mod prompt_record;

pub use preferences::*;
pub use prompt_record::*;
