//! Headless boss encounter runner.
//!
//! Run with: `cargo run -p encounter-cli -- <command>`
//!
//! Logs go to stderr and follow `RUST_LOG` (default `info`); results go to
//! stdout so `--json` output can be piped.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CheckConfig, Duel, Presets};

/// Boss encounter tools
#[derive(Parser)]
#[command(name = "encounter")]
#[command(about = "Run and inspect boss encounters", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Simulate a duel between the boss and a scripted player
    Duel(Duel),

    /// Validate a boss config file and print its phase table
    CheckConfig(CheckConfig),

    /// List the bundled boss presets
    Presets(Presets),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Duel(cmd) => cmd.execute().await,
        Command::CheckConfig(cmd) => cmd.execute(),
        Command::Presets(cmd) => cmd.execute(),
    }
}
