//! pharmaguard-api
//!
//! HTTP surface of the PharmaGuard service: request validation, risk
//! classification, and explanation generation behind two JSON endpoints.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::health::health_check))
        .route("/health", get(routes::health::health_check))
        .route("/supported", get(routes::supported::supported_sets))
        .route("/analyze", post(routes::analyze::analyze))
        .route(
            "/variant-summary",
            post(routes::variant_summary::variant_summary),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
