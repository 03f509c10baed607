//! Query-mix benchmarks for the in-memory table layouts.
//!
//! CLI tool for comparing the layouts on the four fixed query shapes:
//! - SUM(col0)
//! - SUM(col0) WHERE col1 > t1 AND col2 < t2
//! - SUM(all columns) WHERE col0 > t
//! - UPDATE col3 = col3 + col2 WHERE col0 < t

mod benchmarks;
mod cli;
mod utils;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match cli.command {
        Commands::QueryMix(args) => benchmarks::query_mix::run(&args),
        Commands::Load(args) => benchmarks::load::run(&args),
    }
}
