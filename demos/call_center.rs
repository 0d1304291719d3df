//! A call center staffed by a varying number of agents.
//!
//! Calls arrive as a Poisson process and take exponentially distributed time to handle. Each scenario of the batch
//! fixes the number of agents and both rates; every scenario runs for the same horizon with its own random stream, and
//! the results print as one summary line per scenario (or as JSON with `--json`).
//!
//! Without `--config`, the default batch compares one, two, and three agents handling 0.8 calls per unit time at a
//! service rate of 1.0. A batch file looks like this:
//!
//! ```toml
//! horizon = 1000.0
//! seed = 42
//!
//! [[scenario]]
//! agents = 2
//! arrival_rate = 0.8
//! service_rate = 1.0
//! ```
//!
//! Set `RUST_LOG=mmc_sim=trace` to watch individual events.

use clap::Parser;
use mmc_sim::{logging, run_batch, run_batch_parallel, BatchConfig};
use std::path::PathBuf;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "call_center")]
#[command(about = "Simulate an M/M/c call center across staffing scenarios", long_about = None)]
struct Args {
    /// TOML batch file; the built-in one-to-three agent sweep is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the simulated horizon of every scenario
    #[arg(long)]
    horizon: Option<f64>,

    /// Override the base random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Run scenarios on separate threads
    #[arg(long)]
    parallel: bool,

    /// Print the full results, including the queue-length series, as JSON
    #[arg(long)]
    json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init_simulation_logging_with_level(&args.log_level);

    let mut batch = match &args.config {
        Some(path) => BatchConfig::from_path(path)?,
        None => BatchConfig::default(),
    };
    if let Some(horizon) = args.horizon {
        batch.horizon = horizon;
    }
    if let Some(seed) = args.seed {
        batch.seed = seed;
    }

    let results = if args.parallel {
        run_batch_parallel(&batch)?
    } else {
        run_batch(&batch)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for (scenario, summary) in batch.scenarios.iter().zip(&results) {
            println!(
                "λ={:.2} μ={:.2} | {}",
                scenario.arrival_rate, scenario.service_rate, summary
            );
        }
    }

    Ok(())
}
