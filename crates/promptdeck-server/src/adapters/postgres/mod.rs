//! PostgreSQL adapters

mod preferences_repository;
mod prompt_repository;

pub use preferences_repository::PgPreferencesRepository;
pub use prompt_repository::PgPromptRepository;
