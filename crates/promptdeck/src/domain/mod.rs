//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, value objects, the prompt composer, the session
//! state machine, and errors.

pub mod composer;
pub mod entities;
pub mod errors;
pub mod session;
pub mod value_objects;

// Re-exports for convenience
pub use composer::*;
pub use entities::*;
pub use errors::*;
pub use session::*;
pub use value_objects::*;
