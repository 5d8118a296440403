// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Gutenlens book service.

use thiserror::Error;

/// The primary error type used across all Gutenlens crates.
///
/// Each variant maps to one category of the service's error taxonomy:
/// caller input problems, remote fetch/model failures, structural parse
/// failures, and database failures. The gateway translates variants into
/// HTTP statuses; original causes are logged, never sent to clients.
#[derive(Debug, Error)]
pub enum GutenlensError {
    /// Missing or malformed caller input (empty text, unknown analysis kind).
    #[error("validation error: {0}")]
    Validation(String),

    /// The bibliographic page for the requested catalog identifier does not exist.
    #[error("book not found: {book_id}")]
    BookNotFound { book_id: String },

    /// A remote fetch or remote model call failed (network error, non-success status).
    #[error("upstream error: {message}")]
    Upstream {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// HTML or JSON structure did not match expectations.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Database operation failed (connection, query, migration).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_include_context() {
        let err = GutenlensError::Validation("text is required".into());
        assert_eq!(err.to_string(), "validation error: text is required");

        let err = GutenlensError::BookNotFound {
            book_id: "84".into(),
        };
        assert_eq!(err.to_string(), "book not found: 84");

        let err = GutenlensError::Parse {
            message: "invalid structured response from analysis".into(),
        };
        assert!(err.to_string().contains("invalid structured response"));
    }

    #[test]
    fn upstream_error_preserves_source() {
        let io_err = std::io::Error::other("connection refused");
        let err = GutenlensError::Upstream {
            message: "fetch failed".into(),
            source: Some(Box::new(io_err)),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
