// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Gutenlens crates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The kind of textual analysis requested for a book's text.
///
/// Selects both the prompt template and the truncation budget applied
/// before the text is sent to the language model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    /// Identify the main characters with one-line descriptions.
    Character,
    /// Detect the language the text is written in.
    Language,
    /// Free-form sentiment assessment (the only kind returned as prose).
    Sentiment,
    /// Short plot summary.
    Summary,
}

/// A single character identified by the character analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEntry {
    /// Character name as it appears in the text.
    pub name: String,
    /// One-line description of the character's role.
    pub description: String,
}

/// The normalized result of one analysis request.
///
/// Serialized as the shape the kind documents: `{"characters": [...]}`,
/// `{"language": "..."}`, `{"summary": "..."}`, or a bare JSON string for
/// sentiment. Lives only for the single request/response round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    /// Character identification result.
    Characters { characters: Vec<CharacterEntry> },
    /// Language detection result.
    Language { language: String },
    /// Plot summary result.
    Summary { summary: String },
    /// Free-form sentiment prose. Must stay last: untagged deserialization
    /// tries variants in order and a bare string matches nothing above.
    Sentiment(String),
}

/// A single download link scraped from the bibliographic page.
///
/// Both fields are non-empty; candidates failing that are discarded
/// during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    /// Human-readable format label (e.g. "EPUB3", "Plain Text UTF-8").
    pub format: String,
    /// Absolute URL of the download target.
    pub url: String,
}

/// Normalized bibliographic metadata derived from a catalog entry's HTML page.
///
/// Every scalar field carries a fixed human-readable fallback used when the
/// page lacks the corresponding row. Built fresh on every fetch, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMetadata {
    pub title: String,
    pub author: String,
    /// Absolute cover image URL, or `None` when the page has no cover.
    pub cover_image: Option<String>,
    pub release_date: String,
    pub ebook_number: String,
    pub language: String,
    pub summary: String,
    pub download_links: Vec<DownloadLink>,
}

impl Default for BookMetadata {
    fn default() -> Self {
        Self {
            title: fallback::TITLE.to_string(),
            author: fallback::AUTHOR.to_string(),
            cover_image: None,
            release_date: fallback::RELEASE_DATE.to_string(),
            ebook_number: fallback::EBOOK_NUMBER.to_string(),
            language: fallback::LANGUAGE.to_string(),
            summary: fallback::SUMMARY.to_string(),
            download_links: Vec::new(),
        }
    }
}

/// Fallback strings for metadata fields missing from the source page.
pub mod fallback {
    pub const TITLE: &str = "Unknown Title";
    pub const AUTHOR: &str = "Unknown Author";
    pub const RELEASE_DATE: &str = "Unknown Release Date";
    pub const EBOOK_NUMBER: &str = "Unknown EBook-No.";
    pub const LANGUAGE: &str = "Unknown Language";
    pub const SUMMARY: &str = "No Summary Available";
}

/// The full payload returned by a book lookup: raw text plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedBook {
    /// Plain-text book body as served by the archive.
    pub content: String,
    /// Metadata extracted from the bibliographic page.
    pub metadata: BookMetadata,
}

/// A persisted record of one book lookup.
///
/// Rows are insertion-ordered, never updated, never deleted. Repeated
/// lookups of the same identifier create duplicate rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchedBook {
    /// Surrogate key assigned by the database.
    pub id: i64,
    /// Catalog identifier exactly as the user supplied it, unvalidated.
    pub book_id: String,
    /// RFC 3339 timestamp assigned at insert time.
    pub search_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn analysis_kind_parses_wire_strings() {
        assert_eq!(
            AnalysisKind::from_str("character").unwrap(),
            AnalysisKind::Character
        );
        assert_eq!(
            AnalysisKind::from_str("language").unwrap(),
            AnalysisKind::Language
        );
        assert_eq!(
            AnalysisKind::from_str("sentiment").unwrap(),
            AnalysisKind::Sentiment
        );
        assert_eq!(
            AnalysisKind::from_str("summary").unwrap(),
            AnalysisKind::Summary
        );
        assert!(AnalysisKind::from_str("translation").is_err());
    }

    #[test]
    fn analysis_result_serializes_documented_shapes() {
        let summary = AnalysisResult::Summary {
            summary: "A tale of joy.".into(),
        };
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            serde_json::json!({"summary": "A tale of joy."})
        );

        let sentiment = AnalysisResult::Sentiment("Overall melancholic.".into());
        assert_eq!(
            serde_json::to_value(&sentiment).unwrap(),
            serde_json::json!("Overall melancholic.")
        );

        let characters = AnalysisResult::Characters {
            characters: vec![CharacterEntry {
                name: "Victor".into(),
                description: "The ambitious creator.".into(),
            }],
        };
        let value = serde_json::to_value(&characters).unwrap();
        assert_eq!(value["characters"][0]["name"], "Victor");
    }

    #[test]
    fn metadata_default_uses_documented_fallbacks() {
        let meta = BookMetadata::default();
        assert_eq!(meta.title, "Unknown Title");
        assert_eq!(meta.author, "Unknown Author");
        assert_eq!(meta.release_date, "Unknown Release Date");
        assert_eq!(meta.ebook_number, "Unknown EBook-No.");
        assert_eq!(meta.language, "Unknown Language");
        assert_eq!(meta.summary, "No Summary Available");
        assert!(meta.cover_image.is_none());
        assert!(meta.download_links.is_empty());
    }
}
