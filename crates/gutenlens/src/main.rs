// SPDX-FileCopyrightText: 2026 Gutenlens Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gutenlens - book lookup and LLM analysis for Project Gutenberg texts.
//!
//! This is the binary entry point for the Gutenlens service.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gutenlens_config::GutenlensConfig;

mod config_cmd;
mod serve;

/// Gutenlens - book lookup and LLM analysis for Project Gutenberg texts.
#[derive(Parser, Debug)]
#[command(name = "gutenlens", version, about, long_about = None)]
struct Cli {
    /// Path to a specific config file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Gutenlens HTTP server (the default).
    Serve,
    /// Print the resolved configuration with secrets redacted.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            gutenlens_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) | None => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("gutenlens: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => config_cmd::run_config(&config),
    }
}

/// Load and validate config from an explicit path or the XDG hierarchy.
fn load_config(
    path: Option<&std::path::Path>,
) -> Result<GutenlensConfig, Vec<gutenlens_config::ConfigError>> {
    match path {
        None => gutenlens_config::load_and_validate(),
        Some(path) => {
            let config = gutenlens_config::load_config_from_path(path)
                .map_err(gutenlens_config::diagnostic::figment_to_config_errors)?;
            gutenlens_config::validation::validate_config(&config)?;
            Ok(config)
        }
    }
}
