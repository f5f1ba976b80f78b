//! Prompt Composer
//!
//! Deterministic assembly of the combined prompt from labeled sections.
//! Pure function: recomputed whenever any section changes, no side
//! effects.

use crate::domain::entities::PromptSections;

/// Section labels in their fixed emission order.
const LABELS: [&str; 5] = [
    "Instructions",
    "Context",
    "Input Data",
    "Output Requirements",
    "Avoid",
];

/// Assemble the combined prompt. Each non-empty section (after trimming)
/// contributes a `"<Label>:\n<content>"` block; blocks are joined with a
/// blank line. Empty sections are omitted entirely, and an all-empty
/// input yields an empty string.
pub fn compose(sections: &PromptSections) -> String {
    let values = [
        &sections.instructions,
        &sections.context,
        &sections.input_data,
        &sections.output_indicator,
        &sections.negative_prompting,
    ];

    LABELS
        .iter()
        .zip(values)
        .filter_map(|(label, value)| {
            let content = value.trim();
            if content.is_empty() {
                None
            } else {
                Some(format!("{label}:\n{content}"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(
        instructions: &str,
        context: &str,
        input_data: &str,
        output_indicator: &str,
        negative_prompting: &str,
    ) -> PromptSections {
        PromptSections {
            instructions: instructions.to_string(),
            context: context.to_string(),
            input_data: input_data.to_string(),
            output_indicator: output_indicator.to_string(),
            negative_prompting: negative_prompting.to_string(),
        }
    }

    #[test]
    fn all_empty_yields_empty_string() {
        assert_eq!(compose(&PromptSections::default()), "");
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert_eq!(compose(&sections("  \n\t", "", "   ", "", "\n")), "");
    }

    #[test]
    fn single_section() {
        assert_eq!(
            compose(&sections("Say hello", "", "", "", "")),
            "Instructions:\nSay hello"
        );
    }

    #[test]
    fn all_sections_in_fixed_order() {
        let out = compose(&sections("a", "b", "c", "d", "e"));
        assert_eq!(
            out,
            "Instructions:\na\n\nContext:\nb\n\nInput Data:\nc\n\nOutput Requirements:\nd\n\nAvoid:\ne"
        );
    }

    #[test]
    fn empty_sections_are_omitted_without_extra_separators() {
        let out = compose(&sections("", "background", "", "json only", ""));
        assert_eq!(out, "Context:\nbackground\n\nOutput Requirements:\njson only");
    }

    #[test]
    fn content_is_trimmed() {
        let out = compose(&sections("  Say hello  \n", "", "", "", ""));
        assert_eq!(out, "Instructions:\nSay hello");
    }

    #[test]
    fn deterministic() {
        let s = sections("x", "", "y", "", "z");
        assert_eq!(compose(&s), compose(&s));
    }

    #[test]
    fn exactly_one_blank_line_between_blocks() {
        let out = compose(&sections("one", "two", "", "", ""));
        assert_eq!(out.matches("\n\n").count(), 1);
        assert!(!out.contains("\n\n\n"));
    }
}
