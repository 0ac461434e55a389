use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let index = ServeFile::new(app_state.static_dir.join("index.html"));
    let assets = ServeDir::new(&app_state.static_dir);

    Router::new()
        .route_service("/", index)
        .route("/health", get(handlers::health_check))
        .route("/api/extract", post(handlers::extract_handler))
        .route("/api/status", get(handlers::status_handler))
        .nest_service("/static", assets)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
