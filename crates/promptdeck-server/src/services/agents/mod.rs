//! Prompt Agents
//!
//! Prompt templates and response shaping for the proxy endpoints.

pub mod chain_of_thought;
pub mod simple;

pub use chain_of_thought::ChainOfThoughtResult;
