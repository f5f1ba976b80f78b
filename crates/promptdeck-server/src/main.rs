use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;
mod services;

use adapters::{PgPreferencesRepository, PgPromptRepository};
use application::{EnvOverrides, PreferencesService, PromptService};
use services::PromptPipeline;

/// Type aliases for application services with concrete repository implementations
pub type AppPromptService = PromptService<PgPromptRepository>;
pub type AppPreferencesService = PreferencesService<PgPreferencesRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<AppPromptService>,
    pub preferences: Arc<AppPreferencesService>,
    pub pipeline: Arc<PromptPipeline>,
    pub http: reqwest::Client,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Promptdeck API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("Promptdeck API initializing...");

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Database migrations completed");

    // Environment-supplied preferences win over stored ones
    let overrides = EnvOverrides::from_env();
    if overrides.openai_api_key.is_some() {
        tracing::info!("OpenAI API key supplied via environment");
    }
    if overrides.claude_api_key.is_some() {
        tracing::info!("Claude API key supplied via environment");
    }

    // Initialize application services
    let prompt_repo = Arc::new(PgPromptRepository::new(pool.clone()));
    let preferences_repo = Arc::new(PgPreferencesRepository::new(pool));
    let state = AppState {
        prompt_service: Arc::new(PromptService::new(prompt_repo)),
        preferences: Arc::new(PreferencesService::new(preferences_repo, overrides)),
        pipeline: Arc::new(PromptPipeline::new()),
        http: reqwest::Client::new(),
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::prompts::router())
        .merge(routes::preferences::router())
        .merge(routes::llm::router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Promptdeck API listening on port {}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
