// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Every handler converts internal failures into one error category at its
//! outermost scope: validation problems surface as 400 with a short
//! message, unknown books as 404, and everything else as 500 with a
//! per-route generic message. Original causes are logged, never leaked.

use std::str::FromStr;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use gutenlens_core::types::SearchedBook;
use gutenlens_core::{AnalysisKind, AnalysisResult, GutenlensError};
use gutenlens_storage::queries::searches::{self, DEFAULT_RECENT_LIMIT};

use crate::server::AppState;

/// Query parameters for GET /v1/books.
#[derive(Debug, Deserialize)]
pub struct BookQuery {
    /// Catalog identifier of the book to fetch.
    #[serde(default)]
    pub book_id: String,
}

/// Request body for POST /v1/analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to analyze.
    #[serde(default)]
    pub text: String,
    /// One of "character", "language", "sentiment", "summary".
    #[serde(default)]
    pub analysis_type: String,
}

/// Response body for POST /v1/analyze.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// String for sentiment, object for the structured kinds.
    pub result: AnalysisResult,
}

/// Request body for POST /v1/searches.
#[derive(Debug, Deserialize)]
pub struct SaveSearchRequest {
    /// Catalog identifier to record.
    #[serde(default)]
    pub book_id: String,
}

/// Response body for POST /v1/searches.
#[derive(Debug, Serialize)]
pub struct SaveSearchResponse {
    /// Confirmation message.
    pub message: String,
}

/// Response body for GET /v1/searches.
#[derive(Debug, Serialize)]
pub struct SearchListResponse {
    /// Most recent lookups, newest first, capped at ten.
    pub searches: Vec<SearchedBook>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_secs: u64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// GET /v1/books?book_id=
///
/// Fetches the book's plain text and bibliographic metadata from the
/// archive. No caching: every request fetches fresh.
pub async fn get_book(State(state): State<AppState>, Query(query): Query<BookQuery>) -> Response {
    let book_id = query.book_id.trim();
    if book_id.is_empty() {
        return bad_request("book id is required");
    }

    match state.gutenberg.fetch_book(book_id).await {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(err) => error_response(&err, "unable to fetch book data"),
    }
}

/// POST /v1/analyze
///
/// Runs one LLM analysis of the submitted text. The kind is validated
/// here so an unsupported value gets a 400, not a deserialization error.
pub async fn post_analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> Response {
    let kind = match AnalysisKind::from_str(body.analysis_type.trim()) {
        Ok(kind) => kind,
        Err(_) => {
            return bad_request(&format!(
                "unsupported analysis type `{}`",
                body.analysis_type
            ));
        }
    };

    match state.analyzer.analyze(&body.text, kind).await {
        Ok(result) => (StatusCode::OK, Json(AnalyzeResponse { result })).into_response(),
        Err(err) => error_response(&err, "failed to perform text analysis"),
    }
}

/// POST /v1/searches
///
/// Records a book lookup with a server-assigned timestamp.
pub async fn post_search(
    State(state): State<AppState>,
    Json(body): Json<SaveSearchRequest>,
) -> Response {
    let book_id = body.book_id.trim();
    if book_id.is_empty() {
        return bad_request("book id is required");
    }

    match searches::record_search(&state.db, book_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(SaveSearchResponse {
                message: "book search saved".to_string(),
            }),
        )
            .into_response(),
        Err(err) => error_response(&err, "failed to save book search"),
    }
}

/// GET /v1/searches
///
/// Lists the ten most recent lookups, newest first.
pub async fn get_recent_searches(State(state): State<AppState>) -> Response {
    match searches::recent_searches(&state.db, DEFAULT_RECENT_LIMIT).await {
        Ok(searches) => (StatusCode::OK, Json(SearchListResponse { searches })).into_response(),
        Err(err) => error_response(&err, "failed to fetch recent searches"),
    }
}

/// GET /health
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Map an internal error to its HTTP shape.
///
/// `generic_message` is the route's 500-level message for upstream and
/// storage failures; validation, not-found, and parse errors carry their
/// own messages. The original error is logged here and goes no further.
fn error_response(err: &GutenlensError, generic_message: &str) -> Response {
    error!(error = %err, "request failed");

    let (status, message) = match err {
        GutenlensError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
        GutenlensError::BookNotFound { book_id } => {
            (StatusCode::NOT_FOUND, format!("book {book_id} not found"))
        }
        GutenlensError::Parse { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            generic_message.to_string(),
        ),
    };

    (status, Json(ErrorResponse { error: message })).into_response()
}
