//! # Main — CLI Entry Point
//!
//! Parses the benchmark configuration (range, witness rounds, seed),
//! initializes structured logging, runs the harness, and prints the report
//! on stdout.

use anyhow::Result;
use clap::Parser;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use primebench::bench::{self, BenchConfig};

#[derive(Parser)]
#[command(
    name = "primebench",
    about = "Benchmark five primality tests over a contiguous integer range"
)]
struct Cli {
    /// Start of the candidate range (inclusive)
    #[arg(long, default_value_t = 1_000_000_000)]
    start: u64,

    /// End of the candidate range (inclusive)
    #[arg(long, default_value_t = 1_001_000_000)]
    end: u64,

    /// Witness rounds for the Fermat and Miller-Rabin testers
    #[arg(long, default_value_t = 5)]
    iterations: u32,

    /// Seed for witness selection; omit for OS entropy
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Structured logging: LOG_FORMAT=json for machine ingestion, human-readable otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    anyhow::ensure!(
        cli.start <= cli.end,
        "--start ({}) must not exceed --end ({})",
        cli.start,
        cli.end
    );

    let report = bench::run(&BenchConfig {
        start: cli.start,
        end: cli.end,
        rounds: cli.iterations,
        seed: cli.seed,
    });
    print!("{report}");
    Ok(())
}
