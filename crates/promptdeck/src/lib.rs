//! Promptdeck Domain Library
//!
//! Core domain types and interfaces for the Promptdeck prompt workbench.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (PromptRecord, Preferences)
//!   - `value_objects/`: Immutable value types (Provider)
//!   - `composer`: Combined-prompt assembly
//!   - `session`: Save/load/delete session state machine
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptdeck::domain::{PromptRecord, compose};
//! use promptdeck::ports::{PromptRepository, LlmProvider};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    compose, DomainError, Preferences, PromptDraft, PromptRecord, PromptSections, Provider,
    SaveOutcome, Session, SessionState, INVALID_ID_PREFIX, OLLAMA_MODELS,
};
pub use ports::{
    GenerationRequest, LlmProvider, PreferencesRepository, PromptRepository, RecordBackend,
};
