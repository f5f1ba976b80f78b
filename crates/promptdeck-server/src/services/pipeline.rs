//! Prompt Pipeline
//!
//! Dispatches proxy requests to the agents and keeps an in-memory log
//! of recent invocations, successes and failures alike.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::Mutex;

use promptdeck::{DomainError, LlmProvider};

use crate::models::CallLogEntry;
use crate::services::agents::{self, ChainOfThoughtResult};

/// Entries kept in memory
const HISTORY_CAPACITY: usize = 100;

/// Pipeline over the LLM proxy with call-history bookkeeping
pub struct PromptPipeline {
    history: Mutex<VecDeque<CallLogEntry>>,
    counter: AtomicU64,
}

impl PromptPipeline {
    pub fn new() -> Self {
        Self {
            history: Mutex::new(VecDeque::with_capacity(HISTORY_CAPACITY)),
            counter: AtomicU64::new(0),
        }
    }

    /// Process a simple prompt.
    pub async fn simple<P: LlmProvider + ?Sized>(
        &self,
        llm: &P,
        prompt: &str,
        model: &str,
        max_tokens: i32,
        temperature: f32,
    ) -> Result<String, DomainError> {
        let input = serde_json::json!({
            "prompt": prompt,
            "model": model,
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        match agents::simple::process(llm, prompt, model, max_tokens, temperature).await {
            Ok(response) => {
                self.log("simple", input, serde_json::json!({ "response": response }), true)
                    .await;
                Ok(response)
            }
            Err(e) => {
                tracing::warn!("Simple prompt failed: {}", e);
                self.log("simple", input, serde_json::json!({ "error": e.to_string() }), false)
                    .await;
                Err(e)
            }
        }
    }

    /// Process a chain-of-thought problem.
    pub async fn chain_of_thought<P: LlmProvider + ?Sized>(
        &self,
        llm: &P,
        problem: &str,
        model: &str,
        max_tokens: i32,
        temperature: f32,
    ) -> Result<ChainOfThoughtResult, DomainError> {
        let input = serde_json::json!({
            "problem": problem,
            "model": model,
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        match agents::chain_of_thought::process(llm, problem, model, max_tokens, temperature).await
        {
            Ok(result) => {
                let output = serde_json::json!({
                    "steps": result.steps,
                    "final_answer": result.final_answer,
                });
                self.log("chain_of_thought", input, output, true).await;
                Ok(result)
            }
            Err(e) => {
                tracing::warn!("Chain-of-thought prompt failed: {}", e);
                self.log(
                    "chain_of_thought",
                    input,
                    serde_json::json!({ "error": e.to_string() }),
                    false,
                )
                .await;
                Err(e)
            }
        }
    }

    /// The most recent entries, oldest first, capped at `limit`.
    pub async fn recent(&self, limit: usize) -> Vec<CallLogEntry> {
        let history = self.history.lock().await;
        history
            .iter()
            .skip(history.len().saturating_sub(limit))
            .cloned()
            .collect()
    }

    async fn log(
        &self,
        kind: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        success: bool,
    ) {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        let entry = CallLogEntry {
            id: format!("{kind}_{seq}"),
            kind: kind.to_string(),
            timestamp: Utc::now(),
            input,
            output,
            success,
        };

        let mut history = self.history.lock().await;
        if history.len() == HISTORY_CAPACITY {
            history.pop_front();
        }
        history.push_back(entry);
    }
}

impl Default for PromptPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use promptdeck::GenerationRequest;

    struct EchoLlm;

    #[async_trait]
    impl LlmProvider for EchoLlm {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError> {
            Ok(format!("echo: {}", request.prompt.len()))
        }
    }

    struct FailingLlm;

    #[async_trait]
    impl LlmProvider for FailingLlm {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, DomainError> {
            Err(DomainError::Upstream("provider down".to_string()))
        }
    }

    #[tokio::test]
    async fn successes_and_failures_are_both_logged() {
        let pipeline = PromptPipeline::new();

        pipeline
            .simple(&EchoLlm, "hello", "gpt-4", 64, 0.7)
            .await
            .unwrap();
        pipeline
            .simple(&FailingLlm, "hello", "gpt-4", 64, 0.7)
            .await
            .unwrap_err();

        let history = pipeline.recent(50).await;
        assert_eq!(history.len(), 2);
        assert!(history[0].success);
        assert!(!history[1].success);
        assert_eq!(history[1].output["error"], "Upstream provider error: provider down");
    }

    #[tokio::test]
    async fn history_is_capped() {
        let pipeline = PromptPipeline::new();
        for _ in 0..110 {
            let _ = pipeline.simple(&EchoLlm, "x", "gpt-4", 8, 0.0).await;
        }

        assert_eq!(pipeline.recent(usize::MAX).await.len(), 100);
        assert_eq!(pipeline.recent(50).await.len(), 50);

        // Oldest entries were dropped
        let recent = pipeline.recent(usize::MAX).await;
        assert_eq!(recent[0].id, "simple_10");
    }
}
