//! LLM Proxy Routes
//!
//! Forward prompts to the provider the model name implies, with stored
//! preferences filling in whatever the request leaves out.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use promptdeck::{Preferences, OLLAMA_MODELS};

use crate::models::{
    ChainOfThoughtRequest, ChainOfThoughtResponse, ErrorResponse, HistoryResponse, ModelsResponse,
    SimplePromptRequest, SimplePromptResponse,
};
use crate::routes::{error_response, ApiError};
use crate::services::LlmClient;
use crate::AppState;

/// History entries returned by GET /history
const HISTORY_LIMIT: usize = 50;

/// Per-request overrides fall back to the stored preferences.
fn resolve(
    prefs: &Preferences,
    model: Option<String>,
    max_tokens: Option<i32>,
    temperature: Option<f32>,
) -> (String, i32, f32) {
    (
        model.unwrap_or_else(|| prefs.default_model.clone()),
        max_tokens.unwrap_or(prefs.max_tokens),
        temperature.unwrap_or(prefs.temperature),
    )
}

/// Process a simple prompt
#[utoipa::path(
    post,
    path = "/prompt/simple",
    request_body = SimplePromptRequest,
    responses(
        (status = 200, description = "Generated response", body = SimplePromptResponse),
        (status = 400, description = "Unsupported model or missing key", body = ErrorResponse),
        (status = 502, description = "Provider error", body = ErrorResponse)
    ),
    tag = "Llm"
)]
pub async fn simple_prompt(
    State(state): State<AppState>,
    Json(payload): Json<SimplePromptRequest>,
) -> Result<Json<SimplePromptResponse>, ApiError> {
    let prefs = state.preferences.current().await.map_err(error_response)?;
    let (model, max_tokens, temperature) =
        resolve(&prefs, payload.model, payload.max_tokens, payload.temperature);

    let llm = LlmClient::new(state.http.clone(), prefs);
    let response = state
        .pipeline
        .simple(&llm, &payload.prompt, &model, max_tokens, temperature)
        .await
        .map_err(error_response)?;

    Ok(Json(SimplePromptResponse { response }))
}

/// Process a chain-of-thought problem
#[utoipa::path(
    post,
    path = "/prompt/chain-of-thought",
    request_body = ChainOfThoughtRequest,
    responses(
        (status = 200, description = "Reasoned response", body = ChainOfThoughtResponse),
        (status = 400, description = "Unsupported model or missing key", body = ErrorResponse),
        (status = 502, description = "Provider error", body = ErrorResponse)
    ),
    tag = "Llm"
)]
pub async fn chain_of_thought_prompt(
    State(state): State<AppState>,
    Json(payload): Json<ChainOfThoughtRequest>,
) -> Result<Json<ChainOfThoughtResponse>, ApiError> {
    let prefs = state.preferences.current().await.map_err(error_response)?;
    let (model, max_tokens, temperature) =
        resolve(&prefs, payload.model, payload.max_tokens, payload.temperature);

    let llm = LlmClient::new(state.http.clone(), prefs);
    let result = state
        .pipeline
        .chain_of_thought(&llm, &payload.problem, &model, max_tokens, temperature)
        .await
        .map_err(error_response)?;

    Ok(Json(ChainOfThoughtResponse {
        steps: result.steps,
        final_answer: result.final_answer,
        reasoning_process: result.reasoning_process,
    }))
}

/// List the models each provider serves
#[utoipa::path(
    get,
    path = "/models",
    responses((status = 200, description = "Available models", body = ModelsResponse)),
    tag = "Llm"
)]
pub async fn get_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        openai: vec![
            "gpt-3.5-turbo".to_string(),
            "gpt-4".to_string(),
            "gpt-4-turbo".to_string(),
        ],
        claude: vec![
            "claude-3-sonnet".to_string(),
            "claude-3-opus".to_string(),
            "claude-3-haiku".to_string(),
        ],
        ollama: OLLAMA_MODELS.iter().map(|m| m.to_string()).collect(),
    })
}

/// Recent proxy invocations
#[utoipa::path(
    get,
    path = "/history",
    responses((status = 200, description = "Recent calls", body = HistoryResponse)),
    tag = "Llm"
)]
pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: state.pipeline.recent(HISTORY_LIMIT).await,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prompt/simple", post(simple_prompt))
        .route("/prompt/chain-of-thought", post(chain_of_thought_prompt))
        .route("/models", get(get_models))
        .route("/history", get(get_history))
}
