// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway exposing the Gutenlens REST API.
//!
//! Routes:
//! - `GET /v1/books?book_id=` -- fetch a book's text and metadata
//! - `POST /v1/analyze` -- run an LLM analysis of submitted text
//! - `POST /v1/searches` -- record a book lookup
//! - `GET /v1/searches` -- list the ten most recent lookups
//! - `GET /health` -- unauthenticated liveness probe

pub mod handlers;
pub mod server;

pub use server::{build_router, start_server, AppState};
