/// Application routes configuration
use crate::handlers::{
    get_launches, get_previous_launches, get_upcoming_launches, health, AppState,
};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Launch endpoints
        .route("/launches", get(get_launches))
        .route("/upcomingLaunches", get(get_upcoming_launches))
        .route("/previousLaunches", get(get_previous_launches))
        // The browser frontend lives on a different origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
