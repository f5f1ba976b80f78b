//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports.

pub mod postgres;

pub use postgres::{PgPreferencesRepository, PgPromptRepository};
