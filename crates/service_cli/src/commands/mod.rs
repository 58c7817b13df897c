//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod histogram;
pub mod sample;

use clap::Args;
use sampler_core::rng::SamplerRng;
use sampler_core::GenerateParams;
use tracing::info;

/// Distribution parameters shared by the sampling commands
#[derive(Args, Debug, Clone, Default)]
pub struct DistributionArgs {
    /// Mean of the distribution
    #[arg(long, allow_negative_numbers = true)]
    pub mean: Option<f64>,

    /// Standard deviation (must be positive)
    #[arg(long, allow_negative_numbers = true)]
    pub std_dev: Option<f64>,

    /// Lower bound (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Upper bound (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Skew, conventionally in [-1, 1]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub skew: f64,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DistributionArgs {
    /// Parameters for the unified entry point
    pub fn to_params(&self) -> GenerateParams {
        GenerateParams {
            min: self.min,
            max: self.max,
            mean: self.mean,
            std_dev: self.std_dev,
            skew: self.skew,
        }
    }

    /// Seeded source, logging the seed so the run can be replayed
    pub fn rng(&self) -> SamplerRng {
        let rng = match self.seed {
            Some(seed) => SamplerRng::from_seed(seed),
            None => SamplerRng::from_entropy(),
        };
        info!("  Seed: {}", rng.seed());
        rng
    }
}
