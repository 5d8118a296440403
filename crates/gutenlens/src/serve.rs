// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `gutenlens serve` command implementation.
//!
//! Opens the search-history database (running migrations), builds the
//! archive and model clients from configuration, and serves the gateway
//! until the process is stopped.

use gutenlens_analysis::{Analyzer, AnthropicClient};
use gutenlens_config::GutenlensConfig;
use gutenlens_core::GutenlensError;
use gutenlens_gateway::{start_server, AppState};
use gutenlens_gutenberg::GutenbergClient;
use gutenlens_storage::Database;
use tracing::info;

/// Runs the `gutenlens serve` command.
pub async fn run_serve(config: GutenlensConfig) -> Result<(), GutenlensError> {
    init_tracing(&config.server.log_level);

    info!("starting gutenlens serve");

    let db = Database::open(&config.storage.database_path).await?;
    let gutenberg = GutenbergClient::new(&config.gutenberg)?;
    let analyzer = Analyzer::new(AnthropicClient::new(&config.anthropic)?);

    info!(
        archive = %config.gutenberg.base_url,
        model = %config.anthropic.model,
        "collaborators initialized"
    );

    let state = AppState {
        gutenberg,
        analyzer,
        db,
        start_time: std::time::Instant::now(),
    };

    start_server(&config.server, state).await
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gutenlens={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
