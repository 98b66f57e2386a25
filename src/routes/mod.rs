use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, security_headers};
use crate::handlers::{health_check, not_found};
use crate::state::AppState;

pub mod auth;

pub const AUTH_PREFIX: &str = "/api/v1/auth";

pub fn create_routes(state: AppState) -> Router {
    let cors = create_cors_layer(&state.config.allowed_origins);
    let include_hsts = state.config.is_production();

    let router = Router::new()
        .route("/health", get(health_check))
        .nest(AUTH_PREFIX, auth::auth_router())
        .fallback(not_found);

    security_headers(router, include_hsts)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
