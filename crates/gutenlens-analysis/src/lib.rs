// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! LLM text-analysis requester for the Gutenlens book service.
//!
//! Given a book's text and an [`gutenlens_core::AnalysisKind`], truncates
//! the text to the kind's character budget, builds an instruction prompt,
//! invokes the Anthropic Messages API, and normalizes the reply into an
//! [`gutenlens_core::AnalysisResult`].

pub mod analyzer;
pub mod client;
pub mod prompt;
pub mod types;

pub use analyzer::Analyzer;
pub use client::AnthropicClient;
