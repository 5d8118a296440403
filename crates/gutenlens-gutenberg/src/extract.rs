// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-table driven extraction of bibliographic metadata from archive HTML.
//!
//! The bibliographic page lays metadata out as a `#bibrec` table of
//! label/value rows. Each field is located by matching the row's header
//! cell against a known label and reading the adjacent data cell. Adding
//! or adjusting a field is a change to [`BIBREC_RULES`], not to code.

use scraper::{ElementRef, Html, Selector};

use gutenlens_core::types::fallback;
use gutenlens_core::{BookMetadata, DownloadLink};

/// How a rule's label is matched against a row's header cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch {
    /// Header cell text contains the label.
    Substring,
    /// Header cell trimmed text equals the label exactly. Needed where a
    /// substring match is ambiguous ("Language" also matches the
    /// "Original Publication Language" style of row).
    Exact,
}

/// One bibliographic field: where to find it and what to fall back to.
struct BibrecRule {
    label: &'static str,
    matching: LabelMatch,
    fallback: &'static str,
    assign: fn(&mut BookMetadata, String),
}

/// The field rule table. Order matches the metadata record, not the page.
const BIBREC_RULES: &[BibrecRule] = &[
    BibrecRule {
        label: "Title",
        matching: LabelMatch::Substring,
        fallback: fallback::TITLE,
        assign: |m, v| m.title = v,
    },
    BibrecRule {
        label: "Author",
        matching: LabelMatch::Substring,
        fallback: fallback::AUTHOR,
        assign: |m, v| m.author = v,
    },
    BibrecRule {
        label: "Release Date",
        matching: LabelMatch::Substring,
        fallback: fallback::RELEASE_DATE,
        assign: |m, v| m.release_date = v,
    },
    BibrecRule {
        label: "EBook-No.",
        matching: LabelMatch::Substring,
        fallback: fallback::EBOOK_NUMBER,
        assign: |m, v| m.ebook_number = v,
    },
    BibrecRule {
        label: "Language",
        matching: LabelMatch::Exact,
        fallback: fallback::LANGUAGE,
        assign: |m, v| m.language = v,
    },
    BibrecRule {
        label: "Summary",
        matching: LabelMatch::Substring,
        fallback: fallback::SUMMARY,
        assign: |m, v| m.summary = v,
    },
];

/// Filename fragment identifying the medium cover image on the page.
const COVER_FRAGMENT: &str = "cover.medium.jpg";

/// Extract a normalized metadata record from a bibliographic HTML page.
///
/// Every field missing from the page yields its documented fallback;
/// partial metadata is preferred over a failed response. Relative cover
/// and download URLs are made absolute against `origin`.
pub fn extract_metadata(html: &str, origin: &str) -> BookMetadata {
    let document = Html::parse_document(html);
    let mut metadata = BookMetadata::default();

    let rows = collect_bibrec_rows(&document);
    for rule in BIBREC_RULES {
        let value = rows
            .iter()
            .find(|(label, _)| match rule.matching {
                LabelMatch::Substring => label.contains(rule.label),
                LabelMatch::Exact => label.as_str() == rule.label,
            })
            .map(|(_, value)| value.clone())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| rule.fallback.to_string());
        (rule.assign)(&mut metadata, value);
    }

    metadata.cover_image = extract_cover_image(&document, origin);
    metadata.download_links = extract_download_links(&document, origin);
    metadata
}

/// Collect `(header text, data text)` pairs from the `#bibrec` table rows.
///
/// Rows without both a header and a data cell are skipped.
fn collect_bibrec_rows(document: &Html) -> Vec<(String, String)> {
    let row_sel = Selector::parse("#bibrec tr").expect("static selector must parse");
    let th_sel = Selector::parse("th").expect("static selector must parse");
    let td_sel = Selector::parse("td").expect("static selector must parse");

    document
        .select(&row_sel)
        .filter_map(|row| {
            let label = row.select(&th_sel).next().map(cell_text)?;
            let value = row.select(&td_sel).next().map(cell_text)?;
            Some((label, value))
        })
        .collect()
}

/// Locate the cover image by its filename fragment and absolutize its source.
fn extract_cover_image(document: &Html, origin: &str) -> Option<String> {
    let sel = Selector::parse(&format!("img[src*='{COVER_FRAGMENT}']"))
        .expect("static selector must parse");
    let src = document.select(&sel).next()?.value().attr("src")?;
    if src.is_empty() {
        return None;
    }
    Some(absolutize(origin, src))
}

/// Collect download links from the files table.
///
/// A candidate is discarded if either its trimmed label or its resolved
/// URL is empty.
fn extract_download_links(document: &Html, origin: &str) -> Vec<DownloadLink> {
    let sel = Selector::parse("table.files a[href*='/ebooks/']")
        .expect("static selector must parse");

    document
        .select(&sel)
        .filter_map(|anchor| {
            let format = cell_text(anchor);
            let href = anchor.value().attr("href").unwrap_or("").trim();
            if format.is_empty() || href.is_empty() {
                return None;
            }
            Some(DownloadLink {
                format,
                url: absolutize(origin, href),
            })
        })
        .collect()
}

/// Collapse an element's text nodes into one trimmed string.
fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Prefix site-relative URLs with the archive origin; absolute URLs pass through.
fn absolutize(origin: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    let origin = origin.trim_end_matches('/');
    if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    }
}
