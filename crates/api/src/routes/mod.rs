//! API routes

pub mod health;
pub mod orders;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::tenancy::OriginGuard;

/// Create all API routes
pub fn create_router(state: AppState) -> Router {
    let origin_guard = OriginGuard::from_directory(&state.directory);

    let cors = CorsLayer::new()
        .allow_origin(origin_guard.into_allow_origin())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    // The dropship check is called cross-origin from storefront pages, so
    // it carries the CORS layer; one endpoint serves both input forms.
    let order_routes = Router::new()
        .route(
            "/api/check-order-dropship",
            get(orders::check_order_dropship).post(orders::check_order_dropship),
        )
        .layer(cors);

    Router::new()
        .merge(health_routes)
        .merge(order_routes)
        .layer(TraceLayer::new_for_http())
        // Order payloads are small; anything larger is not an order
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .with_state(state)
}
