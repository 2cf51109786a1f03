//! `distributions`: benchmark and inspect the standard normal samplers.
//!
//! # Commands
//!
//! - `distributions bench` - time Box-Muller against the Ziggurat
//! - `distributions stats` - sample moments of either sampler
//! - `distributions cdf` - normal CDF over a grid
//! - `distributions check` - validate the Ziggurat tables

use clap::{Parser, Subcommand};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

use commands::SamplerKind;
use error::Result;

/// Standard normal sampler driver
#[derive(Parser, Debug)]
#[command(name = "distributions")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Time N Box-Muller samples against N Ziggurat samples
    Bench {
        /// Samples per sampler
        #[arg(short = 'n', long, env = "DISTRIBUTIONS_SAMPLES", default_value_t = 1_000_000)]
        samples: usize,

        /// Seed for both sources
        #[arg(short, long, env = "DISTRIBUTIONS_SEED", default_value_t = 0)]
        seed: u64,
    },

    /// Mean, variance and range of N samples
    Stats {
        /// Number of samples
        #[arg(short = 'n', long, env = "DISTRIBUTIONS_SAMPLES", default_value_t = 1_000_000)]
        samples: usize,

        /// Which sampler to draw from
        #[arg(long, value_enum, default_value_t = SamplerKind::Ziggurat)]
        sampler: SamplerKind,

        /// Source seed
        #[arg(short, long, env = "DISTRIBUTIONS_SEED", default_value_t = 0)]
        seed: u64,
    },

    /// Print `x cdf(x)` over an evenly spaced grid
    Cdf {
        #[arg(long, default_value_t = -3.0, allow_negative_numbers = true)]
        from: f64,

        #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
        to: f64,

        #[arg(long, default_value_t = 1.0)]
        step: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mean: f64,

        /// Standard deviation
        #[arg(long, default_value_t = 1.0)]
        sd: f64,
    },

    /// Validate the Ziggurat tables and print their key values
    Check,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Bench { samples, seed } => commands::bench::run(samples, seed),
        Commands::Stats {
            samples,
            sampler,
            seed,
        } => commands::stats::run(samples, sampler, seed),
        Commands::Cdf {
            from,
            to,
            step,
            mean,
            sd,
        } => commands::cdf::run(from, to, step, mean, sd),
        Commands::Check => commands::check::run(),
    }
}
