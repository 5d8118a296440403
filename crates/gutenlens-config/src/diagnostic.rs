// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Converts Figment deserialization errors into miette diagnostics with
//! "did you mean?" suggestions using Jaro-Winkler string similarity.

use miette::Diagnostic;
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
/// 0.75 catches common typos like `prot` -> `port` while filtering noise.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Every key the configuration model recognizes, used for typo suggestions.
const KNOWN_KEYS: &[&str] = &[
    "server",
    "host",
    "port",
    "log_level",
    "anthropic",
    "api_key",
    "model",
    "api_version",
    "max_tokens",
    "base_url",
    "gutenberg",
    "fetch_timeout_secs",
    "storage",
    "database_path",
];

/// A configuration error with diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(gutenlens::config::unknown_key),
        help("{}", format_unknown_key_help(suggestion.as_deref()))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
    },

    /// A validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(gutenlens::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(gutenlens::config::other))]
    Other(String),
}

/// Format the help text for an unknown-key diagnostic.
fn format_unknown_key_help(suggestion: Option<&str>) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`?"),
        None => "see gutenlens.toml.example for valid keys".to_string(),
    }
}

/// Convert a figment extraction error into diagnostic config errors.
///
/// Figment reports unknown keys with messages of the form
/// `unknown field `prot`, expected one of ...`; those get a fuzzy-match
/// suggestion against the known key list. Everything else passes through
/// as [`ConfigError::Other`].
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    err.into_iter()
        .map(|e| {
            let message = e.to_string();
            match extract_unknown_field(&message) {
                Some(key) => ConfigError::UnknownKey {
                    suggestion: suggest_key(&key),
                    key,
                },
                None => ConfigError::Other(message),
            }
        })
        .collect()
}

/// Render config errors to stderr via miette's report formatting.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        eprintln!(
            "{:?}",
            miette::Report::msg(error.to_string()).wrap_err("invalid configuration")
        );
        if let Some(help) = error.help() {
            eprintln!("  help: {help}");
        }
    }
}

/// Pull the offending key out of a serde `unknown field` message.
fn extract_unknown_field(message: &str) -> Option<String> {
    let rest = message.split("unknown field `").nth(1)?;
    let key = rest.split('`').next()?;
    Some(key.to_string())
}

/// Find the closest known key by Jaro-Winkler similarity.
pub fn suggest_key(key: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|candidate| (candidate, strsim::jaro_winkler(key, candidate)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_key() {
        assert_eq!(suggest_key("prot").as_deref(), Some("port"));
        assert_eq!(suggest_key("api_kye").as_deref(), Some("api_key"));
    }

    #[test]
    fn no_suggestion_for_distant_key() {
        assert!(suggest_key("zzzzzz").is_none());
    }

    #[test]
    fn extracts_unknown_field_from_serde_message() {
        let msg = "unknown field `prot`, expected one of `host`, `port`, `log_level`";
        assert_eq!(extract_unknown_field(msg).as_deref(), Some("prot"));
        assert!(extract_unknown_field("missing field `port`").is_none());
    }

    #[test]
    fn figment_unknown_key_becomes_suggestion() {
        let err = crate::loader::load_config_from_str(
            r#"
            [server]
            prot = 9999
            "#,
        )
        .unwrap_err();
        let errors = figment_to_config_errors(err);
        assert!(!errors.is_empty());
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigError::UnknownKey { suggestion: Some(s), .. } if s == "port"
        )));
    }
}
