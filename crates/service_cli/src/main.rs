//! gauss - command-line front end for the Gaussian sampler
//!
//! # Commands
//!
//! - `gauss sample --mean 50 --std-dev 10` - print draws, one per line
//! - `gauss histogram --min 0 --max 100 --skew 0.5` - summary statistics and a text histogram
//! - `gauss check` - print the effective configuration
//!
//! Parameter precedence follows the unified entry point: a complete
//! `--mean`/`--std-dev` pair wins and any bounds are ignored; otherwise a
//! complete `--min`/`--max` pair selects bounded sampling.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::DistributionArgs;
use config::{build_config, CliArgs};

/// Skewed and bounded Gaussian sampler
#[derive(Parser)]
#[command(name = "gauss")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skew policy: cubic or mean-flip
    #[arg(long, global = true)]
    skew_policy: Option<String>,

    /// Cap on bounded rejection attempts (0 = unbounded)
    #[arg(long, global = true)]
    max_attempts: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print sampled values, one per line
    Sample {
        #[command(flatten)]
        distribution: DistributionArgs,

        /// Number of values to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Draw many values and chart them
    Histogram {
        #[command(flatten)]
        distribution: DistributionArgs,

        /// Number of values to draw (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Widest bar in characters (defaults to the configured width)
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Print the effective configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        verbose: cli.verbose,
        skew_policy: cli.skew_policy.clone(),
        max_attempts: cli.max_attempts,
    })?;

    // Initialise tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Effective configuration");

    match cli.command {
        Commands::Sample {
            distribution,
            count,
        } => commands::sample::run(&config, &distribution, count),
        Commands::Histogram {
            distribution,
            count,
            format,
            width,
        } => commands::histogram::run(
            &config,
            &distribution,
            count.unwrap_or(config.histogram_count),
            &format,
            width.unwrap_or(config.histogram_width),
        ),
        Commands::Check => commands::check::run(&config),
    }
}
