//! CLI for E2LSH parameter selection.
//!
//! Prints the full derivation record, one `key: value` per line, or as JSON
//! with `--json`. Exits non-zero on any invalid configuration without
//! printing a partial record.
//!
//! Usage:
//!   lshtune --points 10000 --ratio 1.2 --target 3000 --rounding ceil

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lshtune::{compute_parameters, Rounding};

#[derive(Parser)]
#[command(name = "lshtune")]
#[command(about = "Derive E2LSH tuning parameters (K, L) in closed form")]
struct Args {
    /// Number of points to index
    #[arg(short = 'n', long, default_value = "10000")]
    points: f64,

    /// Approximation ratio C (must exceed 1)
    #[arg(short = 'c', long, default_value = "1.2")]
    ratio: f64,

    /// Target query-cost divisor t
    #[arg(short = 't', long, default_value = "3000")]
    target: f64,

    /// Rounding policy for K: ceil, round, or floor
    #[arg(long, default_value = "ceil")]
    rounding: Rounding,

    /// Emit the record as JSON instead of key: value lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let params = compute_parameters(args.points, args.ratio, args.target, args.rounding)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&params)?);
    } else {
        println!("{params}");
    }

    Ok(())
}
