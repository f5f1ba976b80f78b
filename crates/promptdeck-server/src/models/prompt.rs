//! Prompt record DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use promptdeck::{PromptDraft, PromptRecord, PromptSections};

/// Body for POST /prompts/save and PUT /prompts/:id
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavePromptRequest {
    #[serde(default)]
    pub title: String,
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
    #[serde(default)]
    pub combined_prompt: String,
    #[serde(default)]
    pub response: String,
}

impl SavePromptRequest {
    pub fn into_draft(self) -> PromptDraft {
        PromptDraft {
            title: self.title,
            sections: PromptSections {
                instructions: self.instructions,
                context: self.context,
                input_data: self.input_data,
                output_indicator: self.output_indicator,
                negative_prompting: self.negative_prompting,
            },
            combined_prompt: self.combined_prompt,
            response: self.response,
        }
    }
}

/// A stored prompt record as returned over the wire
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecordDto {
    pub id: Uuid,
    pub title: String,
    pub instructions: String,
    pub context: String,
    pub input_data: String,
    pub output_indicator: String,
    pub negative_prompting: String,
    pub combined_prompt: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PromptRecord> for PromptRecordDto {
    fn from(record: PromptRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            instructions: record.sections.instructions,
            context: record.sections.context,
            input_data: record.sections.input_data,
            output_indicator: record.sections.output_indicator,
            negative_prompting: record.sections.negative_prompting,
            combined_prompt: record.combined_prompt,
            response: record.response,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// 201 envelope for a successful save
#[derive(Debug, Serialize, ToSchema)]
pub struct SavePromptResponse {
    pub message: String,
    pub data: PromptRecordDto,
    pub id: Uuid,
}

/// Envelope for GET /prompts
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptListResponse {
    pub data: Vec<PromptRecordDto>,
}

/// Envelope for GET /prompts/:id
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptDataResponse {
    pub data: PromptRecordDto,
}

/// Envelope for update and delete confirmations
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptMessageResponse {
    pub message: String,
    pub data: PromptRecordDto,
}
