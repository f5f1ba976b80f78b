//! Application Services (Use Cases)
//!
//! Orchestrate domain operations over the repository ports.

mod preferences_service;
mod prompt_service;

pub use preferences_service::*;
pub use prompt_service::*;
