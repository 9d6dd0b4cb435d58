//! Percolation threshold CLI.
//!
//! Runs `trials` Monte Carlo trials on an n-by-n grid and prints the sample
//! mean, standard deviation, and confidence interval of the threshold.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use percolation::experiment::{ExperimentConfig, PercolationStats, Sampling};

#[derive(Parser, Debug)]
#[command(name = "percolation")]
#[command(version)]
#[command(about = "Estimate the site percolation threshold of an n-by-n grid")]
struct Cli {
    /// Grid side length
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    n: u64,

    /// Number of independent trials
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,

    /// RNG seed for reproducible runs (OS entropy when omitted)
    #[arg(long, env = "PERCOLATION_SEED")]
    seed: Option<u64>,

    /// How each trial picks the next site to open
    #[arg(long, value_enum, default_value_t = SamplingArg::Redraw)]
    sampling: SamplingArg,

    /// Confidence level of the reported interval
    #[arg(long, default_value_t = 0.95)]
    confidence: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SamplingArg {
    Redraw,
    BlockedPool,
}

impl From<SamplingArg> for Sampling {
    fn from(arg: SamplingArg) -> Self {
        match arg {
            SamplingArg::Redraw => Sampling::Redraw,
            SamplingArg::BlockedPool => Sampling::BlockedPool,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    if !(cli.confidence > 0.0 && cli.confidence < 1.0) {
        bail!("--confidence must be in (0, 1), got {}", cli.confidence);
    }

    let n = usize::try_from(cli.n).context("n does not fit in usize")?;
    let trials = usize::try_from(cli.trials).context("trials does not fit in usize")?;

    let mut config = ExperimentConfig::new(n, trials).with_sampling(cli.sampling.into());
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    info!(n, trials, seed = ?config.seed, sampling = ?config.sampling, "running experiment");

    let stats = PercolationStats::with_config(&config).context("experiment failed")?;
    let (lo, hi) = if cli.confidence == 0.95 {
        (stats.confidence_lo(), stats.confidence_hi())
    } else {
        stats.confidence_interval(cli.confidence)?
    };

    let label = format!("{}% confidence interval", percent(cli.confidence));
    println!("{:<24}= {}", "mean", stats.mean());
    println!("{:<24}= {}", "stddev", stats.stddev());
    println!("{label:<24}= [{lo}, {hi}]");

    Ok(())
}

/// Formats a fraction as a percentage with at most two decimals.
fn percent(fraction: f64) -> String {
    let text = format!("{:.2}", fraction * 100.0);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
