// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Gutenlens book service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Gutenlens configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values; only `anthropic.api_key` has no usable default.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GutenlensConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Anthropic API settings for the analysis requester.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Project Gutenberg archive settings for the metadata extractor.
    #[serde(default)]
    pub gutenberg: GutenbergConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Anthropic API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnthropicConfig {
    /// Anthropic API key. `None` requires the environment variable
    /// `GUTENLENS_ANTHROPIC_API_KEY` to be set before `serve` will start.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model to use for analysis requests.
    #[serde(default = "default_model")]
    pub model: String,

    /// Anthropic API version header value.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Maximum tokens to generate per analysis reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Base URL of the Messages API. Overridable for tests and proxies.
    #[serde(default = "default_anthropic_base_url")]
    pub base_url: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            api_version: default_api_version(),
            max_tokens: default_max_tokens(),
            base_url: default_anthropic_base_url(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_anthropic_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

/// Project Gutenberg archive configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GutenbergConfig {
    /// Origin of the archive. Relative cover and download URLs are made
    /// absolute against this. Overridable for tests.
    #[serde(default = "default_gutenberg_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds for archive fetches.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for GutenbergConfig {
    fn default() -> Self {
        Self {
            base_url: default_gutenberg_base_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_gutenberg_base_url() -> String {
    "https://www.gutenberg.org".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|d| d.join("gutenlens/gutenlens.db").display().to_string())
        .unwrap_or_else(|| "gutenlens.db".to_string())
}
