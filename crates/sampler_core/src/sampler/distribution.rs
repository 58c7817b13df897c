//! `rand_distr::Distribution` implementations.
//!
//! These let the sampler plug into any `rand::Rng`:
//!
//! ```rust
//! use rand::{Rng, SeedableRng};
//! use rand::rngs::StdRng;
//! use sampler_core::sampler::{SkewNormal, SkewPolicy};
//!
//! let dist = SkewNormal::new(50.0, 10.0, 0.3, SkewPolicy::Cubic).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let values: Vec<f64> = (&mut rng).sample_iter(dist).take(100).collect();
//! assert_eq!(values.len(), 100);
//! ```

use rand::Rng;
use rand_distr::Distribution;

use super::box_muller;
use super::params::{BoundedParams, GaussianParams};
use super::skew::SkewPolicy;
use crate::error::Result;
use crate::rng::RngSource;

/// Skewed normal distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewNormal {
    params: GaussianParams,
    policy: SkewPolicy,
}

impl SkewNormal {
    /// Validates and builds the distribution.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `std_dev ≤ 0` or a value is not finite.
    pub fn new(mean: f64, std_dev: f64, skew: f64, policy: SkewPolicy) -> Result<Self> {
        Ok(Self::from_params(GaussianParams::new(mean, std_dev, skew)?, policy))
    }

    /// Builds the distribution from validated parameters.
    pub fn from_params(params: GaussianParams, policy: SkewPolicy) -> Self {
        Self { params, policy }
    }

    /// Underlying parameters.
    pub fn params(&self) -> &GaussianParams {
        &self.params
    }
}

impl Distribution<f64> for SkewNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let mut source = RngSource::new(rng);
        let z0 = box_muller::standard_normal(&mut source);
        self.policy.apply(
            z0,
            self.params.mean(),
            self.params.std_dev(),
            self.params.skew(),
            &mut source,
        )
    }
}

/// Skewed normal restricted to `[min, max]` by rejection.
///
/// The rejection loop is unbounded. Use
/// [`GaussianSampler`](super::GaussianSampler) with
/// `SamplerConfig::max_attempts` when latency must be bounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedSkewNormal {
    params: BoundedParams,
    inner: SkewNormal,
}

impl BoundedSkewNormal {
    /// Validates and builds the distribution, defaulting `mean` and `std_dev`
    /// from the bounds.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `min ≥ max` or the resolved `std_dev ≤ 0`.
    pub fn new(
        min: f64,
        max: f64,
        mean: Option<f64>,
        std_dev: Option<f64>,
        skew: f64,
        policy: SkewPolicy,
    ) -> Result<Self> {
        let params = BoundedParams::new(min, max, mean, std_dev, skew)?;
        Ok(Self {
            params,
            inner: SkewNormal::from_params(params.resolved(), policy),
        })
    }

    /// Underlying parameters.
    pub fn params(&self) -> &BoundedParams {
        &self.params
    }
}

impl Distribution<f64> for BoundedSkewNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        loop {
            let value = self.inner.sample(rng);
            if self.params.contains(value) {
                return value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SamplerRng;
    use crate::sampler::{GaussianSampler, SamplerConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_matches_sampler_for_same_stream() {
        let dist = SkewNormal::new(5.0, 2.0, -0.7, SkewPolicy::MeanFlip).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let mut sampler = GaussianSampler::with_config(
            SamplerRng::from_seed(99),
            SamplerConfig::new(SkewPolicy::MeanFlip),
        );

        for _ in 0..100 {
            let a = dist.sample(&mut rng);
            let b = sampler.sample(5.0, 2.0, -0.7).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_bounded_distribution_in_range() {
        let dist = BoundedSkewNormal::new(0.0, 1.0, None, None, 0.9, SkewPolicy::Cubic).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10_000 {
            let value = dist.sample(&mut rng);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_invalid_construction() {
        assert!(SkewNormal::new(0.0, 0.0, 0.0, SkewPolicy::Cubic).is_err());
        assert!(BoundedSkewNormal::new(1.0, 0.0, None, None, 0.0, SkewPolicy::Cubic).is_err());
    }
}
