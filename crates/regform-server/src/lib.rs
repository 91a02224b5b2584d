// regform-server - server-rendered host for the registration form
// Maud pages over axum, plus a JSON endpoint backing on-change validation

pub mod config;
pub mod render;
pub mod routes;

use axum::{routing::get, routing::post, Router};
use regform::{registration_schema, Schema};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub schema: Arc<Schema>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            schema: Arc::new(registration_schema()),
        }
    }
}

/// Build the router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index).post(routes::submit))
        .route("/validate", post(routes::validate))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
