//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod preferences_repository;
mod prompt_repository;

pub use preferences_repository::*;
pub use prompt_repository::*;
