//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CallLogEntry,
    ChainOfThoughtRequest,
    ChainOfThoughtResponse,
    ErrorResponse,
    HistoryResponse,
    MessageResponse,
    ModelsResponse,
    // Preferences models
    PreferencesView,
    PromptDataResponse,
    PromptListResponse,
    PromptMessageResponse,
    // Prompt models
    PromptRecordDto,
    SavePromptRequest,
    SavePromptResponse,
    // Llm models
    SimplePromptRequest,
    SimplePromptResponse,
    UpdatePreferencesRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Prompt endpoints
        super::prompts::save_prompt,
        super::prompts::list_prompts,
        super::prompts::get_prompt,
        super::prompts::update_prompt,
        super::prompts::delete_prompt,
        // Preferences endpoints
        super::preferences::get_preferences,
        super::preferences::update_preferences,
        // Llm endpoints
        super::llm::simple_prompt,
        super::llm::chain_of_thought_prompt,
        super::llm::get_models,
        super::llm::get_history,
    ),
    components(schemas(
        PromptRecordDto,
        SavePromptRequest,
        SavePromptResponse,
        PromptListResponse,
        PromptDataResponse,
        PromptMessageResponse,
        PreferencesView,
        UpdatePreferencesRequest,
        MessageResponse,
        SimplePromptRequest,
        SimplePromptResponse,
        ChainOfThoughtRequest,
        ChainOfThoughtResponse,
        ModelsResponse,
        HistoryResponse,
        CallLogEntry,
        ErrorResponse,
    )),
    tags(
        (name = "Prompts", description = "Prompt record lifecycle"),
        (name = "Preferences", description = "Model and credential configuration"),
        (name = "Llm", description = "LLM proxy endpoints")
    ),
    info(
        title = "Promptdeck API",
        description = "Prompt composition workbench: record store and LLM proxy"
    )
)]
pub struct ApiDoc;
