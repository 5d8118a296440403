// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Gutenlens book service.
//!
//! This crate provides the shared error type and the domain types passed
//! between the extractor, analysis, storage, and gateway crates.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::GutenlensError;
pub use types::{
    AnalysisKind, AnalysisResult, BookMetadata, CharacterEntry, DownloadLink, FetchedBook,
    SearchedBook,
};
