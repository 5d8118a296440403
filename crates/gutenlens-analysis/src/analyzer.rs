// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The analysis requester: validation, prompting, and reply normalization.
//!
//! Sentiment replies pass through as trimmed prose. Every other kind is
//! parsed as the JSON shape its prompt requested; a reply that does not
//! match is a parse error distinct from upstream failure, so the caller
//! can tell "model unreachable" from "model answered garbage".

use gutenlens_core::{AnalysisKind, AnalysisResult, CharacterEntry, GutenlensError};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::AnthropicClient;
use crate::prompt::build_prompt;

/// Message for replies that fail structured parsing.
const INVALID_STRUCTURED_RESPONSE: &str = "invalid structured response from analysis";

/// High-level analysis requester wrapping the Anthropic client.
#[derive(Debug, Clone)]
pub struct Analyzer {
    client: AnthropicClient,
}

#[derive(Debug, Deserialize)]
struct CharactersReply {
    characters: Vec<CharacterEntry>,
}

#[derive(Debug, Deserialize)]
struct LanguageReply {
    language: String,
}

#[derive(Debug, Deserialize)]
struct SummaryReply {
    summary: String,
}

impl Analyzer {
    /// Creates an analyzer around an existing API client.
    pub fn new(client: AnthropicClient) -> Self {
        Self { client }
    }

    /// Run one analysis of `text` for the requested kind.
    ///
    /// Empty or whitespace-only text fails validation before anything is
    /// sent upstream. The text is truncated to the kind's character budget
    /// inside prompt construction.
    pub async fn analyze(
        &self,
        text: &str,
        kind: AnalysisKind,
    ) -> Result<AnalysisResult, GutenlensError> {
        if text.trim().is_empty() {
            return Err(GutenlensError::Validation("text is required".to_string()));
        }

        let prompt = build_prompt(kind, text);
        debug!(%kind, prompt_chars = prompt.chars().count(), "sending analysis request");

        let reply = self.client.complete(&prompt).await?;
        normalize_reply(kind, &reply)
    }
}

/// Normalize a model reply into the kind's documented result shape.
fn normalize_reply(kind: AnalysisKind, reply: &str) -> Result<AnalysisResult, GutenlensError> {
    if kind == AnalysisKind::Sentiment {
        // The one kind whose prompt requests prose; returned verbatim.
        return Ok(AnalysisResult::Sentiment(reply.trim().to_string()));
    }

    let json = strip_code_fences(reply);
    let parsed = match kind {
        AnalysisKind::Character => serde_json::from_str::<CharactersReply>(json)
            .map(|r| AnalysisResult::Characters {
                characters: r.characters,
            }),
        AnalysisKind::Language => serde_json::from_str::<LanguageReply>(json)
            .map(|r| AnalysisResult::Language {
                language: r.language,
            }),
        AnalysisKind::Summary => serde_json::from_str::<SummaryReply>(json)
            .map(|r| AnalysisResult::Summary { summary: r.summary }),
        AnalysisKind::Sentiment => unreachable!("handled above"),
    };

    parsed.map_err(|e| {
        warn!(%kind, error = %e, "model reply did not match requested JSON shape");
        GutenlensError::Parse {
            message: INVALID_STRUCTURED_RESPONSE.to_string(),
        }
    })
}

/// Strip a surrounding markdown code fence, if present.
///
/// Models wrap JSON in ```json fences often enough that rejecting those
/// replies would make the parse-failure path the common case.
fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the first newline.
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}
