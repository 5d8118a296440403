// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./gutenlens.toml` > `~/.config/gutenlens/gutenlens.toml`
//! > `/etc/gutenlens/gutenlens.toml` with environment variable overrides via
//! the `GUTENLENS_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::GutenlensConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/gutenlens/gutenlens.toml` (system-wide)
/// 3. `~/.config/gutenlens/gutenlens.toml` (user XDG config)
/// 4. `./gutenlens.toml` (local directory)
/// 5. `GUTENLENS_*` environment variables
pub fn load_config() -> Result<GutenlensConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(GutenlensConfig::default()))
        .merge(Toml::file("/etc/gutenlens/gutenlens.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("gutenlens/gutenlens.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("gutenlens.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<GutenlensConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(GutenlensConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<GutenlensConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(GutenlensConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `GUTENLENS_ANTHROPIC_API_KEY` must map
/// to `anthropic.api_key`, not `anthropic.api.key`.
fn env_provider() -> Env {
    Env::prefixed("GUTENLENS_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: GUTENLENS_ANTHROPIC_API_KEY -> "anthropic_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("anthropic_", "anthropic.", 1)
            .replacen("gutenberg_", "gutenberg.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_defaults_from_empty_toml() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [server]
            port = 9999

            [anthropic]
            api_key = "sk-test"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.anthropic.api_key.as_deref(), Some("sk-test"));
        // Untouched sections keep their defaults.
        assert_eq!(config.gutenberg.base_url, "https://www.gutenberg.org");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = load_config_from_str(
            r#"
            [server]
            prot = 9999
            "#,
        );
        assert!(result.is_err());
    }
}
