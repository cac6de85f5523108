mod handlers;
mod ws;

use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::registry::ConnectionRegistry;
use crate::store::DatasetStore;

/// Shared state handed to every handler: the dataset store and the
/// listener registry. Both are cheap clones over shared interiors.
#[derive(Clone)]
pub struct AppState {
    pub store: DatasetStore,
    pub registry: ConnectionRegistry,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: DatasetStore::new(),
            registry: ConnectionRegistry::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_router(state: AppState) -> Router {
    create_router_with_origins(state, &ServerConfig::default_origins())
}

pub fn create_router_with_origins(state: AppState, origins: &[String]) -> Router {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    // Credentialed CORS forbids wildcards, so methods and headers mirror
    // whatever the browser asks for in the preflight.
    let cors = CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/cloud-costs", get(handlers::get_cloud_costs))
        .route("/service-usage", get(handlers::get_service_usage))
        .route("/daily-costs", get(handlers::get_daily_costs))
        .route("/resources", get(handlers::get_resources))
        .route("/estimate-cost", post(handlers::estimate_cost))
        .route("/filtered-costs", get(handlers::get_filtered_costs))
        .route("/update-cloud-costs", put(handlers::update_cloud_costs))
        .route("/update-service-usage", put(handlers::update_service_usage))
        .route("/ws", get(ws::listen))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
