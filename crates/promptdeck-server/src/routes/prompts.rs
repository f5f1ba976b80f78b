//! Prompt Record Routes
//!
//! HTTP handlers that delegate to PromptService for the record
//! lifecycle.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::models::{
    ErrorResponse, PromptDataResponse, PromptListResponse, PromptMessageResponse,
    SavePromptRequest, SavePromptResponse,
};
use crate::routes::{error_response, parse_id, ApiError};
use crate::AppState;

/// Save a new prompt record
#[utoipa::path(
    post,
    path = "/prompts/save",
    request_body = SavePromptRequest,
    responses(
        (status = 201, description = "Prompt saved", body = SavePromptResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    ),
    tag = "Prompts"
)]
pub async fn save_prompt(
    State(state): State<AppState>,
    Json(payload): Json<SavePromptRequest>,
) -> Result<(StatusCode, Json<SavePromptResponse>), ApiError> {
    let record = state
        .prompt_service
        .create(payload.into_draft())
        .await
        .map_err(error_response)?;

    let id = record.id;
    Ok((
        StatusCode::CREATED,
        Json(SavePromptResponse {
            message: "Prompt saved successfully".to_string(),
            data: record.into(),
            id,
        }),
    ))
}

/// List the most recent prompts (newest first, at most 50)
#[utoipa::path(
    get,
    path = "/prompts",
    responses(
        (status = 200, description = "Recent prompts", body = PromptListResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    ),
    tag = "Prompts"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
) -> Result<Json<PromptListResponse>, ApiError> {
    let records = state.prompt_service.list().await.map_err(error_response)?;

    Ok(Json(PromptListResponse {
        data: records.into_iter().map(Into::into).collect(),
    }))
}

/// Get a prompt by ID
#[utoipa::path(
    get,
    path = "/prompts/{id}",
    params(("id" = String, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Prompt found", body = PromptDataResponse),
        (status = 400, description = "Invalid prompt ID", body = ErrorResponse),
        (status = 404, description = "Prompt not found", body = ErrorResponse)
    ),
    tag = "Prompts"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PromptDataResponse>, ApiError> {
    let id = parse_id(&id)?;
    let record = state.prompt_service.get(id).await.map_err(error_response)?;

    Ok(Json(PromptDataResponse {
        data: record.into(),
    }))
}

/// Update an existing prompt in place
#[utoipa::path(
    put,
    path = "/prompts/{id}",
    params(("id" = String, Path, description = "Prompt ID")),
    request_body = SavePromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = PromptMessageResponse),
        (status = 400, description = "Invalid ID or missing fields", body = ErrorResponse),
        (status = 404, description = "Prompt not found", body = ErrorResponse)
    ),
    tag = "Prompts"
)]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SavePromptRequest>,
) -> Result<Json<PromptMessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let record = state
        .prompt_service
        .update(id, payload.into_draft())
        .await
        .map_err(error_response)?;

    Ok(Json(PromptMessageResponse {
        message: "Prompt updated successfully".to_string(),
        data: record.into(),
    }))
}

/// Delete a prompt, returning it as confirmation
#[utoipa::path(
    delete,
    path = "/prompts/{id}",
    params(("id" = String, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Prompt deleted", body = PromptMessageResponse),
        (status = 400, description = "Invalid prompt ID", body = ErrorResponse),
        (status = 404, description = "Prompt not found", body = ErrorResponse)
    ),
    tag = "Prompts"
)]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PromptMessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let record = state
        .prompt_service
        .delete(id)
        .await
        .map_err(error_response)?;

    Ok(Json(PromptMessageResponse {
        message: "Prompt deleted successfully".to_string(),
        data: record.into(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prompts", get(list_prompts))
        .route("/prompts/save", post(save_prompt))
        .route(
            "/prompts/:id",
            get(get_prompt).put(update_prompt).delete(delete_prompt),
        )
}
