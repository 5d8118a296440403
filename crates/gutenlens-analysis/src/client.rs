// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Anthropic Messages API.
//!
//! Provides [`AnthropicClient`] which handles request construction,
//! authentication headers, and response extraction. Calls are not
//! retried; the user re-triggers a failed analysis.

use std::time::Duration;

use gutenlens_config::model::AnthropicConfig;
use gutenlens_core::GutenlensError;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorResponse, ApiMessage, MessageRequest, MessageResponse, ResponseContentBlock};

/// HTTP client for Anthropic API communication.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    model: String,
    max_tokens: u32,
    messages_url: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic API client from configuration.
    ///
    /// Fails with a configuration error when no API key is set.
    pub fn new(config: &AnthropicConfig) -> Result<Self, GutenlensError> {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            GutenlensError::Config(
                "anthropic.api_key is not set (gutenlens.toml or GUTENLENS_ANTHROPIC_API_KEY)"
                    .to_string(),
            )
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).map_err(|e| {
                GutenlensError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_str(&config.api_version).map_err(|e| {
                GutenlensError::Config(format!("invalid API version header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| GutenlensError::Upstream {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            messages_url: format!("{}/v1/messages", config.base_url.trim_end_matches('/')),
        })
    }

    /// Sends a single-turn completion request and returns the reply text.
    ///
    /// The reply is the concatenation of the response's text blocks; a
    /// response with no text block is an upstream error.
    pub async fn complete(&self, prompt: &str) -> Result<String, GutenlensError> {
        let request = MessageRequest {
            model: self.model.clone(),
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.messages_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GutenlensError::Upstream {
                message: format!("analysis request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "completion response received");

        let body = response.text().await.map_err(|e| GutenlensError::Upstream {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!(
                    "Anthropic API error ({}): {}",
                    api_err.error.type_, api_err.error.message
                )
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(GutenlensError::Upstream {
                message,
                source: None,
            });
        }

        let msg: MessageResponse =
            serde_json::from_str(&body).map_err(|e| GutenlensError::Upstream {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        let text: String = msg
            .content
            .iter()
            .map(|block| {
                let ResponseContentBlock::Text { text } = block;
                text.as_str()
            })
            .collect();

        if text.is_empty() {
            return Err(GutenlensError::Upstream {
                message: "model reply contained no text".to_string(),
                source: None,
            });
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> AnthropicConfig {
        AnthropicConfig {
            api_key: Some("test-api-key".into()),
            base_url: base_url.to_string(),
            ..AnthropicConfig::default()
        }
    }

    fn reply_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "msg_test",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": text}],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        })
    }

    #[tokio::test]
    async fn complete_returns_reply_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("Hi there!")))
            .mount(&server)
            .await;

        let client = AnthropicClient::new(&test_config(&server.uri())).unwrap();
        let text = client.complete("Hello").await.unwrap();
        assert_eq!(text, "Hi there!");
    }

    #[tokio::test]
    async fn client_sends_auth_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-api-key"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("ok")))
            .mount(&server)
            .await;

        let client = AnthropicClient::new(&test_config(&server.uri())).unwrap();
        let result = client.complete("Hello").await;
        assert!(result.is_ok(), "headers should match: {result:?}");
    }

    #[tokio::test]
    async fn api_error_becomes_upstream_error() {
        let server = MockServer::start().await;
        let error_body = serde_json::json!({
            "error": {"type": "invalid_request_error", "message": "Bad model"}
        });
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
            .mount(&server)
            .await;

        let client = AnthropicClient::new(&test_config(&server.uri())).unwrap();
        let err = client.complete("Hello").await.unwrap_err();
        assert!(
            matches!(&err, GutenlensError::Upstream { message, .. }
                if message.contains("invalid_request_error")),
            "got: {err:?}"
        );
    }

    #[tokio::test]
    async fn empty_reply_is_upstream_error() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "id": "msg_empty",
            "type": "message",
            "role": "assistant",
            "content": [],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 1, "output_tokens": 0}
        });
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = AnthropicClient::new(&test_config(&server.uri())).unwrap();
        let err = client.complete("Hello").await.unwrap_err();
        assert!(matches!(err, GutenlensError::Upstream { .. }), "got: {err:?}");
    }

    #[test]
    fn missing_api_key_is_config_error() {
        let err = AnthropicClient::new(&AnthropicConfig::default()).unwrap_err();
        assert!(matches!(err, GutenlensError::Config(_)), "got: {err:?}");
    }
}
