// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, the permissive CORS layer for the browser frontend,
//! and shared state for request handlers.

use axum::{
    routing::{get, post},
    Router,
};
use gutenlens_analysis::Analyzer;
use gutenlens_config::model::ServerConfig;
use gutenlens_core::GutenlensError;
use gutenlens_gutenberg::GutenbergClient;
use gutenlens_storage::Database;
use tower_http::cors::CorsLayer;

use crate::handlers;

/// Shared state for axum request handlers.
///
/// Each field is an independent, stateless collaborator; handlers never
/// share mutable state across requests.
#[derive(Clone)]
pub struct AppState {
    /// Archive client for book fetches.
    pub gutenberg: GutenbergClient,
    /// LLM analysis requester.
    pub analyzer: Analyzer,
    /// Search-history database handle.
    pub db: Database,
    /// Process start time for uptime reporting.
    pub start_time: std::time::Instant,
}

/// Build the gateway router over the given state.
///
/// Split out from [`start_server`] so tests can drive the router without
/// binding a socket.
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::get_health))
        .with_state(state.clone());

    let api_routes = Router::new()
        .route("/v1/books", get(handlers::get_book))
        .route("/v1/analyze", post(handlers::post_analyze))
        .route(
            "/v1/searches",
            post(handlers::post_search).get(handlers::get_recent_searches),
        )
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server and serve until the process stops.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), GutenlensError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| GutenlensError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| GutenlensError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
