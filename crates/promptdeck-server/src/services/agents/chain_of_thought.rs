//! Chain-of-Thought Agent
//!
//! Wraps a problem statement in a step-by-step reasoning template,
//! then splits the reply into numbered steps and a final answer.

use promptdeck::{DomainError, GenerationRequest, LlmProvider};

/// Parsed reasoning output
#[derive(Debug, Clone, PartialEq)]
pub struct ChainOfThoughtResult {
    pub steps: Vec<String>,
    pub final_answer: String,
    pub reasoning_process: String,
}

/// Template applied to every chain-of-thought problem.
pub fn thinking_prompt(problem: &str) -> String {
    format!(
        "Please solve this problem using clear step-by-step reasoning:\n\n\
         {problem}\n\n\
         Please structure your response as follows:\n\
         1. Understanding: What is being asked?\n\
         2. Analysis: Break down the problem\n\
         3. Steps: Work through each part systematically\n\
         4. Conclusion: Provide your final answer\n\n\
         Be thorough and show your reasoning process clearly."
    )
}

pub async fn process<P: LlmProvider + ?Sized>(
    llm: &P,
    problem: &str,
    model: &str,
    max_tokens: i32,
    temperature: f32,
) -> Result<ChainOfThoughtResult, DomainError> {
    let request = GenerationRequest {
        prompt: thinking_prompt(problem),
        model: model.to_string(),
        max_tokens,
        temperature,
    };

    let full_response = llm.generate(&request).await?;
    let (steps, final_answer) = parse_response(&full_response);

    Ok(ChainOfThoughtResult {
        steps,
        final_answer,
        reasoning_process: full_response,
    })
}

const STEP_MARKERS: &[&str] = &[
    "understanding:",
    "analysis:",
    "step",
    "first",
    "second",
    "third",
    "next",
];

const CONCLUSION_MARKERS: &[&str] = &["conclusion:", "final answer:", "therefore:", "result:"];

fn is_numbered(line: &str) -> bool {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && line[digits..].starts_with('.')
}

fn is_step_start(line: &str) -> bool {
    let lower = line.to_lowercase();
    is_numbered(line) || STEP_MARKERS.iter().any(|m| lower.contains(m))
}

fn is_conclusion_start(line: &str) -> bool {
    let lower = line.to_lowercase();
    CONCLUSION_MARKERS.iter().any(|m| lower.contains(m))
}

/// Split a reply into reasoning steps and a final answer. Lines that
/// open a numbered item or carry a step keyword start a new step;
/// conclusion keywords switch to collecting the final answer;
/// continuation lines attach to whatever is open. Unstructured replies
/// fall back to a paragraph split.
pub fn parse_response(response: &str) -> (Vec<String>, String) {
    let mut steps: Vec<String> = Vec::new();
    let mut final_answer = String::new();
    let mut current_step = String::new();
    let mut in_conclusion = false;

    for line in response.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if is_step_start(line) && !in_conclusion {
            if !current_step.is_empty() {
                steps.push(std::mem::take(&mut current_step));
            }
            current_step = line.to_string();
        } else if is_conclusion_start(line) && !in_conclusion {
            if !current_step.is_empty() {
                steps.push(std::mem::take(&mut current_step));
            }
            in_conclusion = true;
            final_answer = line.to_string();
        } else if in_conclusion {
            final_answer.push(' ');
            final_answer.push_str(line);
        } else if !current_step.is_empty() {
            current_step.push(' ');
            current_step.push_str(line);
        }
    }

    if !current_step.is_empty() && !in_conclusion {
        steps.push(current_step);
    }

    // Fallback when the reply carries no recognizable structure
    if steps.is_empty() {
        let paragraphs: Vec<&str> = response
            .split("\n\n")
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect();

        steps = if paragraphs.len() > 1 {
            paragraphs[..paragraphs.len() - 1]
                .iter()
                .map(|p| p.to_string())
                .collect()
        } else {
            vec!["Analyzing the problem...".to_string()]
        };
        final_answer = paragraphs
            .last()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "Analysis complete.".to_string());
    }

    (steps, final_answer.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_reply_splits_into_steps_and_answer() {
        let reply = "1. Understanding: We need the sum of 2 and 3.\n\
                     2. Analysis: Simple addition.\n\
                     3. Steps: 2 + 3 = 5.\n\
                     Conclusion: The answer is 5.";
        let (steps, final_answer) = parse_response(reply);

        assert_eq!(steps.len(), 3);
        assert!(steps[0].starts_with("1. Understanding"));
        assert_eq!(final_answer, "Conclusion: The answer is 5.");
    }

    #[test]
    fn continuation_lines_attach_to_open_step() {
        let reply = "1. Understanding: the problem\nhas two parts.\n2. Analysis: done.";
        let (steps, _) = parse_response(reply);

        assert_eq!(steps[0], "1. Understanding: the problem has two parts.");
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn conclusion_collects_following_lines() {
        let reply = "1. Steps: compute.\nTherefore: the result\nis forty-two.";
        let (_, final_answer) = parse_response(reply);

        assert_eq!(final_answer, "Therefore: the result is forty-two.");
    }

    #[test]
    fn unstructured_reply_falls_back_to_paragraphs() {
        let reply = "Just some musings about the problem.\n\nIt all adds up to five.";
        let (steps, final_answer) = parse_response(reply);

        assert_eq!(steps, vec!["Just some musings about the problem."]);
        assert_eq!(final_answer, "It all adds up to five.");
    }

    #[test]
    fn single_paragraph_gets_placeholder_step() {
        let (steps, final_answer) = parse_response("It is five.");

        assert_eq!(steps, vec!["Analyzing the problem..."]);
        assert_eq!(final_answer, "It is five.");
    }

    #[test]
    fn empty_reply_yields_placeholders() {
        let (steps, final_answer) = parse_response("");

        assert_eq!(steps, vec!["Analyzing the problem..."]);
        assert_eq!(final_answer, "Analysis complete.");
    }

    #[test]
    fn template_embeds_the_problem() {
        let prompt = thinking_prompt("What is 2 + 3?");
        assert!(prompt.contains("What is 2 + 3?"));
        assert!(prompt.contains("step-by-step"));
    }
}
