//! Server-side Services
//!
//! - llm: provider clients (OpenAI, Anthropic, Ollama) behind one router
//! - agents: prompt templates and response shaping
//! - pipeline: request dispatch plus in-memory call history

pub mod agents;
pub mod llm;
pub mod pipeline;

pub use llm::LlmClient;
pub use pipeline::PromptPipeline;
