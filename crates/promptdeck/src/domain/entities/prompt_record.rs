//! PromptRecord - Persisted Prompt Entry
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// The five optional labeled sections a prompt is assembled from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSections {
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub input_data: String,
    #[serde(default)]
    pub output_indicator: String,
    #[serde(default)]
    pub negative_prompting: String,
}

impl PromptSections {
    pub fn is_empty(&self) -> bool {
        [
            &self.instructions,
            &self.context,
            &self.input_data,
            &self.output_indicator,
            &self.negative_prompting,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
    }
}

/// Mutable fields of a prompt record, as supplied by a client on
/// create or update. System fields (id, timestamps) are assigned
/// server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptDraft {
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub sections: PromptSections,
    /// Persisted verbatim; the store never recomputes it.
    #[serde(default)]
    pub combined_prompt: String,
    /// Last LLM response the client associated with this record.
    #[serde(default)]
    pub response: String,
}

impl PromptDraft {
    /// Title and combined prompt are required for any record that exists
    /// in the store. Enforced at write time.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() || self.combined_prompt.trim().is_empty() {
            return Err(DomainError::validation(
                "Title and combined prompt are required",
            ));
        }
        Ok(())
    }
}

/// PromptRecord - a stored prompt with its structured sections and the
/// last response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    pub id: Uuid,
    pub title: String,
    #[serde(flatten)]
    pub sections: PromptSections,
    pub combined_prompt: String,
    #[serde(default)]
    pub response: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PromptRecord {
    /// Create a new record from a draft with generated ID and timestamps.
    pub fn new(draft: PromptDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            sections: draft.sections,
            combined_prompt: draft.combined_prompt,
            response: draft.response,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace all mutable fields from a draft, refreshing `updated_at`.
    /// `id` and `created_at` are untouched.
    pub fn apply(&self, draft: PromptDraft) -> Self {
        Self {
            id: self.id,
            title: draft.title,
            sections: draft.sections,
            combined_prompt: draft.combined_prompt,
            response: draft.response,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    /// Project the record back into a draft, for replaying a loaded
    /// record into a form.
    pub fn to_draft(&self) -> PromptDraft {
        PromptDraft {
            title: self.title.clone(),
            sections: self.sections.clone(),
            combined_prompt: self.combined_prompt.clone(),
            response: self.response.clone(),
        }
    }
}
