//! Data generation CLI
//!
//! Replays recorded games and plays random self-play games, writing one
//! training sample per position.

use std::env;
use std::path::Path;

use anyhow::Context;
use datagen::{run, DatagenConfig};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Crazyhouse Data Generator");
    println!();
    println!("Usage:");
    println!("  datagen <config.toml>");
    println!();
    println!("Config keys:");
    println!("  output        - JSONL file to write (default samples.jsonl)");
    println!("  games_file    - recorded games, one per line");
    println!("  random_games  - number of random self-play games");
    println!("  max_plies     - self-play length cap (default 300)");
    println!("  seed          - base seed for self-play");
    println!("  threads       - worker threads (default: all cores)");
    println!();
    println!("Set RUST_LOG=debug for per-game logging.");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(config_path) = args.get(1) else {
        print_usage();
        return Ok(());
    };
    if config_path == "help" || config_path == "--help" || config_path == "-h" {
        print_usage();
        return Ok(());
    }

    let config = DatagenConfig::load(Path::new(config_path))
        .with_context(|| format!("failed to load config {config_path}"))?;
    let summary = run(&config).context("data generation failed")?;

    println!();
    summary.print_report();
    println!("Wrote {}", config.output.display());
    Ok(())
}
