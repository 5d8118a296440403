// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `gutenlens config` command implementation.

use gutenlens_config::GutenlensConfig;

/// Print the resolved configuration as TOML with the API key redacted.
pub fn run_config(config: &GutenlensConfig) {
    let mut shown = config.clone();
    if shown.anthropic.api_key.is_some() {
        shown.anthropic.api_key = Some("<redacted>".to_string());
    }

    match toml::to_string_pretty(&shown) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => {
            eprintln!("gutenlens: failed to render config: {e}");
            std::process::exit(1);
        }
    }
}
