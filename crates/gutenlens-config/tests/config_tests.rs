// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Gutenlens configuration system.

use gutenlens_config::diagnostic::suggest_key;
use gutenlens_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_gutenlens_config() {
    let toml = r#"
[server]
host = "0.0.0.0"
port = 3000
log_level = "debug"

[anthropic]
api_key = "sk-ant-123"
model = "claude-sonnet-4-20250514"
max_tokens = 2048

[gutenberg]
base_url = "https://mirror.gutenberg.example"
fetch_timeout_secs = 10

[storage]
database_path = "/tmp/gutenlens-test.db"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.log_level, "debug");
    assert_eq!(config.anthropic.api_key.as_deref(), Some("sk-ant-123"));
    assert_eq!(config.anthropic.max_tokens, 2048);
    assert_eq!(config.gutenberg.base_url, "https://mirror.gutenberg.example");
    assert_eq!(config.gutenberg.fetch_timeout_secs, 10);
    assert_eq!(config.storage.database_path, "/tmp/gutenlens-test.db");
}

/// Unknown field in a section produces a deserialization error.
#[test]
fn unknown_field_produces_error() {
    let toml = r#"
[anthropic]
api_kye = "sk-test"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("api_kye"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Typo'd keys get a fuzzy-match suggestion.
#[test]
fn typo_gets_suggestion() {
    assert_eq!(suggest_key("databse_path").as_deref(), Some("database_path"));
    assert_eq!(suggest_key("log_levl").as_deref(), Some("log_level"));
}

/// Validation errors are collected, not fail-fast.
#[test]
fn validation_collects_all_errors() {
    let errors = load_and_validate_str(
        r#"
[server]
log_level = "loud"

[anthropic]
max_tokens = 0
"#,
    )
    .expect_err("invalid values should fail validation");
    assert!(errors.len() >= 2, "expected both errors, got {errors:?}");
}

/// An empty config yields pure defaults and passes validation.
#[test]
fn empty_config_is_valid() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert_eq!(config.server.port, 8080);
    assert!(config.anthropic.api_key.is_none());
}
