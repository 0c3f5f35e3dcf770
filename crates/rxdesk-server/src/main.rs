use std::sync::Arc;

use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

use adapters::SupabasePrescriptionRepository;
use application::PrescriptionService;
use config::SupabaseConfig;
use rxdesk::PrescriptionRepository;

/// Application service bound to whichever repository the process was wired with
pub type AppPrescriptionService = PrescriptionService<dyn PrescriptionRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prescription_service: Arc<AppPrescriptionService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn PrescriptionRepository>) -> Self {
        Self {
            prescription_service: Arc::new(PrescriptionService::new(repo)),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Rxdesk API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router: API routes, docs, health, CORS and request tracing
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    // Any origin, method and header; credentials allowed (origin is mirrored)
    let cors = CorsLayer::very_permissive();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::prescription::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(middleware::map_response(error::json_error_body)),
        )
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("💊 Rxdesk API initializing...");

    // Secrets.toml wins; fall back to the environment (and a local .env)
    dotenvy::dotenv().ok();
    let config = SupabaseConfig::from_lookup(|name| {
        secrets.get(name).or_else(|| std::env::var(name).ok())
    })
    .context("Refusing to start without Supabase credentials")?;

    tracing::info!(url = %config.url, table = %config.table, "🔌 Supabase configured");

    let repo = SupabasePrescriptionRepository::new(&config)
        .context("Failed to initialize Supabase client")?;
    let state = AppState::new(Arc::new(repo));

    let router = app(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Rxdesk API ready");

    Ok(router.into())
}
