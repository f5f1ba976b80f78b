//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod provider;

pub use provider::*;
