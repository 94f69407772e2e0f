use crate::api::{handlers, AppState};
use crate::config::ServerConfig;
use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the main API router
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health_check))
        // Incident search
        .route("/incidents", get(handlers::search_incidents))
        .route("/incidents/recent", get(handlers::recent_incidents))
        .route("/incidents/all", get(handlers::all_incidents))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(CorsLayer::permissive())
}
