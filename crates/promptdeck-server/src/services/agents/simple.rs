//! Simple Agent
//!
//! Wraps a raw user prompt in a fixed helpfulness preamble and trims
//! the reply.

use promptdeck::{DomainError, GenerationRequest, LlmProvider};

/// Template applied to every simple prompt.
pub fn enhance(prompt: &str) -> String {
    format!(
        "Please provide a helpful, accurate, and well-structured response to the following:\n\n{prompt}\n\nResponse:"
    )
}

pub async fn process<P: LlmProvider + ?Sized>(
    llm: &P,
    prompt: &str,
    model: &str,
    max_tokens: i32,
    temperature: f32,
) -> Result<String, DomainError> {
    let request = GenerationRequest {
        prompt: enhance(prompt),
        model: model.to_string(),
        max_tokens,
        temperature,
    };

    let response = llm.generate(&request).await?;
    Ok(response.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_embeds_the_prompt() {
        let enhanced = enhance("What is Rust?");
        assert!(enhanced.contains("What is Rust?"));
        assert!(enhanced.ends_with("Response:"));
    }
}
