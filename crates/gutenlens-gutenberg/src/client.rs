// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Project Gutenberg archive.
//!
//! Fetches a catalog entry's plain-text body and bibliographic HTML page
//! concurrently and hands the page to the extractor. No caching and no
//! retry; the caller re-triggers on failure.

use std::time::Duration;

use gutenlens_config::model::GutenbergConfig;
use gutenlens_core::{FetchedBook, GutenlensError};
use tracing::debug;

use crate::extract::extract_metadata;

/// HTTP client for archive fetches.
///
/// Holds a pooled `reqwest` client with an explicit per-request timeout
/// and the configured archive origin.
#[derive(Debug, Clone)]
pub struct GutenbergClient {
    http: reqwest::Client,
    base_url: String,
}

impl GutenbergClient {
    /// Creates a new archive client from configuration.
    pub fn new(config: &GutenbergConfig) -> Result<Self, GutenlensError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(concat!("gutenlens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GutenlensError::Upstream {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a book's text body and metadata by catalog identifier.
    ///
    /// The two fetches are independent and issued concurrently. A 404 on
    /// the bibliographic page becomes [`GutenlensError::BookNotFound`];
    /// any other failure on either fetch fails the whole call. There is
    /// no partial-success path.
    pub async fn fetch_book(&self, book_id: &str) -> Result<FetchedBook, GutenlensError> {
        let content_url = format!("{base}/files/{book_id}/{book_id}-0.txt", base = self.base_url);
        let metadata_url = format!("{base}/ebooks/{book_id}", base = self.base_url);
        debug!(book_id, "fetching book content and bibliographic page");

        let (content, metadata_html) = tokio::join!(
            self.fetch_content(&content_url),
            self.fetch_bibliographic_page(book_id, &metadata_url),
        );
        let (content, metadata_html) = (content?, metadata_html?);

        let metadata = extract_metadata(&metadata_html, &self.base_url);
        debug!(book_id, title = %metadata.title, "metadata extracted");

        Ok(FetchedBook { content, metadata })
    }

    /// Fetch the plain-text body.
    ///
    /// The body is taken as-is whatever the response status: the archive
    /// serves some texts under different filenames, and a wrong-guess 404
    /// body surfaces to the user instead of failing an otherwise valid
    /// lookup. Only transport errors fail the call.
    async fn fetch_content(&self, url: &str) -> Result<String, GutenlensError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GutenlensError::Upstream {
                message: format!("failed to fetch book content: {e}"),
                source: Some(Box::new(e)),
            })?;

        response.text().await.map_err(|e| GutenlensError::Upstream {
            message: format!("failed to read book content: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Fetch the bibliographic HTML page, distinguishing unknown identifiers.
    async fn fetch_bibliographic_page(
        &self,
        book_id: &str,
        url: &str,
    ) -> Result<String, GutenlensError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GutenlensError::Upstream {
                message: format!("failed to fetch bibliographic page: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GutenlensError::BookNotFound {
                book_id: book_id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(GutenlensError::Upstream {
                message: format!("bibliographic page returned {status}"),
                source: None,
            });
        }

        response.text().await.map_err(|e| GutenlensError::Upstream {
            message: format!("failed to read bibliographic page: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GutenbergClient {
        GutenbergClient::new(&GutenbergConfig {
            base_url: base_url.to_string(),
            fetch_timeout_secs: 5,
        })
        .unwrap()
    }

    const BIBREC_HTML: &str = r#"<html><body>
        <div id="bibrec"><table>
          <tr><th>Title</th><td>Frankenstein</td></tr>
          <tr><th>Author</th><td>Shelley, Mary</td></tr>
          <tr><th>Language</th><td>English</td></tr>
        </table></div>
        </body></html>"#;

    #[tokio::test]
    async fn fetch_book_returns_content_and_metadata() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/files/84/84-0.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("It was a dreary night"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ebooks/84"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BIBREC_HTML))
            .mount(&server)
            .await;

        let book = test_client(&server.uri()).fetch_book("84").await.unwrap();
        assert_eq!(book.content, "It was a dreary night");
        assert_eq!(book.metadata.title, "Frankenstein");
        assert_eq!(book.metadata.author, "Shelley, Mary");
        // Fields absent from the page carry their fallbacks.
        assert_eq!(book.metadata.summary, "No Summary Available");
    }

    #[tokio::test]
    async fn missing_bibliographic_page_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/files/99999/99999-0.txt"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ebooks/99999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .fetch_book("99999")
            .await
            .unwrap_err();
        assert!(
            matches!(&err, GutenlensError::BookNotFound { book_id } if book_id == "99999"),
            "got: {err:?}"
        );
    }

    #[tokio::test]
    async fn server_error_on_bibliographic_page_is_upstream() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/files/84/84-0.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("text"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ebooks/84"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = test_client(&server.uri()).fetch_book("84").await.unwrap_err();
        assert!(matches!(err, GutenlensError::Upstream { .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn content_404_body_is_passed_through() {
        // Some texts live under a different filename; a 404 content body
        // must not fail a lookup whose bibliographic page exists.
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/files/2701/2701-0.txt"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<h1>404</h1>"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ebooks/2701"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BIBREC_HTML))
            .mount(&server)
            .await;

        let book = test_client(&server.uri()).fetch_book("2701").await.unwrap();
        assert_eq!(book.content, "<h1>404</h1>");
        assert_eq!(book.metadata.title, "Frankenstein");
    }
}
