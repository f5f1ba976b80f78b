//! Preferences Routes

use axum::{extract::State, routing::get, Json, Router};

use crate::models::{ErrorResponse, MessageResponse, PreferencesView, UpdatePreferencesRequest};
use crate::routes::{error_response, ApiError};
use crate::AppState;

/// Get the effective preferences with API keys masked
#[utoipa::path(
    get,
    path = "/preferences",
    responses(
        (status = 200, description = "Current preferences", body = PreferencesView),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    ),
    tag = "Preferences"
)]
pub async fn get_preferences(
    State(state): State<AppState>,
) -> Result<Json<PreferencesView>, ApiError> {
    let prefs = state.preferences.current().await.map_err(error_response)?;

    Ok(Json(prefs.into()))
}

/// Overwrite the stored preferences
#[utoipa::path(
    post,
    path = "/preferences",
    request_body = UpdatePreferencesRequest,
    responses(
        (status = 200, description = "Preferences updated", body = MessageResponse),
        (status = 400, description = "Out-of-range values", body = ErrorResponse)
    ),
    tag = "Preferences"
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePreferencesRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .preferences
        .save(payload.into())
        .await
        .map_err(error_response)?;

    Ok(Json(MessageResponse {
        message: "Preferences updated successfully".to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/preferences", get(get_preferences).post(update_preferences))
}
