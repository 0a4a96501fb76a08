//! # claimpulse CLI
//!
//! Command-line interface for ClaimPulse - a demo health-insurance assistant.
//!
//! ## Usage
//!
//! - `claimpulse` - Start the interactive demo
//! - `claimpulse scenarios` - List the canned demo scenarios
//! - `claimpulse glossary` - Browse the insurance glossary
//!
//! Everything runs on canned data with a seedable random source; no real
//! claims or protected health information are involved.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;

use commands::{glossary_command, interactive_command, scenarios_command};
use config::DemoConfigLoader;

/// claimpulse - a demo health-insurance assistant
#[derive(Parser)]
#[command(name = "claimpulse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A demo health-insurance assistant running entirely on mock data")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the jittered mock outputs (fixed seed gives repeatable demos)
    #[arg(long)]
    seed: Option<u64>,

    /// Override all simulated processing delays, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Skip simulated processing delays entirely
    #[arg(long)]
    skip_delays: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the canned demo scenarios
    Scenarios {
        /// Restrict to one feature area (e.g. treatment-checker)
        #[arg(long)]
        area: Option<String>,

        /// Emit JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Browse the insurance glossary
    Glossary {
        /// Case-insensitive search over terms and definitions
        #[arg(long)]
        search: Option<String>,

        /// Restrict to one category (e.g. costs, claims)
        #[arg(long)]
        category: Option<String>,

        /// Emit JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> DemoConfigLoader {
    let mut loader = DemoConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(seed) = cli.seed {
        loader = loader.with_seed_override(seed);
    }

    if let Some(delay_ms) = cli.delay_ms {
        loader = loader.with_delay_override(delay_ms);
    }

    loader = loader.with_skip_delays(cli.skip_delays);

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Scenarios { area, json }) => scenarios_command(area, json).await,
        Some(Commands::Glossary {
            search,
            category,
            json,
        }) => glossary_command(search, category, json).await,
        // Default to interactive mode
        None => interactive_command(config_loader).await,
    }
}
