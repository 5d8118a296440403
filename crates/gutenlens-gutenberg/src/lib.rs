// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Project Gutenberg fetcher and bibliographic metadata extractor.
//!
//! Provides [`GutenbergClient`], which fetches a book's plain-text body and
//! its bibliographic HTML page from the archive and derives a normalized
//! [`gutenlens_core::BookMetadata`] record via rule-table driven structural
//! extraction.

pub mod client;
pub mod extract;

pub use client::GutenbergClient;
pub use extract::extract_metadata;
