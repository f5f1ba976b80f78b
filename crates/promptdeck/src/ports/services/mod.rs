//! Service Ports
//!
//! Abstract interfaces for external services.

mod llm_provider;
mod record_backend;

pub use llm_provider::*;
pub use record_backend::*;
