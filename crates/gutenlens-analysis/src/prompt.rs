// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-kind truncation budgets and prompt templates.
//!
//! Character and summary analyses need broad context; language and
//! sentiment only need a representative excerpt, so their budget is kept
//! small to hold API cost and latency down.

use gutenlens_core::AnalysisKind;

/// Character budget for character identification and summary prompts.
pub const LARGE_BUDGET: usize = 20_000;

/// Character budget for language detection and sentiment prompts.
pub const SMALL_BUDGET: usize = 7_000;

/// The truncation budget for a given analysis kind, in characters.
pub fn char_budget(kind: AnalysisKind) -> usize {
    match kind {
        AnalysisKind::Character | AnalysisKind::Summary => LARGE_BUDGET,
        AnalysisKind::Language | AnalysisKind::Sentiment => SMALL_BUDGET,
    }
}

/// Truncate `text` to at most `budget` characters, on a char boundary.
pub fn truncate_to_budget(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build the instruction prompt for a kind, embedding the truncated text.
///
/// Character, language, and summary prompts instruct the model to answer
/// with the kind's documented JSON shape and nothing else; sentiment asks
/// for free-form prose.
pub fn build_prompt(kind: AnalysisKind, text: &str) -> String {
    let excerpt = truncate_to_budget(text, char_budget(kind));
    match kind {
        AnalysisKind::Character => format!(
            "Identify the main characters in the following book excerpt. \
             Respond with only a JSON object of the form \
             {{\"characters\": [{{\"name\": \"...\", \"description\": \"...\"}}]}} \
             where each description is a single sentence. No other text.\n\n\
             Excerpt:\n{excerpt}"
        ),
        AnalysisKind::Language => format!(
            "Detect the language the following book excerpt is written in. \
             Respond with only a JSON object of the form \
             {{\"language\": \"...\"}} naming the language in English. \
             No other text.\n\n\
             Excerpt:\n{excerpt}"
        ),
        AnalysisKind::Sentiment => format!(
            "Describe the overall sentiment and emotional tone of the \
             following book excerpt in a short paragraph of plain prose.\n\n\
             Excerpt:\n{excerpt}"
        ),
        AnalysisKind::Summary => format!(
            "Summarize the plot of the following book excerpt. Respond with \
             only a JSON object of the form {{\"summary\": \"...\"}} where \
             the summary is a few sentences long. No other text.\n\n\
             Excerpt:\n{excerpt}"
        ),
    }
}
