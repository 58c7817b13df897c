//! The sampler: Box-Muller, skew, scaling and rejection sampling.

use tracing::{debug, trace};

use super::box_muller;
use super::config::SamplerConfig;
use super::params::{BoundedParams, GaussianParams, GenerateParams, SampleRequest};
use crate::error::{Result, SamplerError};
use crate::rng::UniformSource;

/// Gaussian sampler over an injected uniform source.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::SamplerRng;
/// use sampler_core::sampler::GaussianSampler;
///
/// let mut sampler = GaussianSampler::new(SamplerRng::from_seed(42));
///
/// let x = sampler.sample(50.0, 10.0, 0.0).unwrap();
/// assert!(x.is_finite());
///
/// let y = sampler.sample_bounded(10.0, 20.0, None, None, 0.0).unwrap();
/// assert!((10.0..=20.0).contains(&y));
/// ```
#[derive(Debug, Clone)]
pub struct GaussianSampler<S> {
    source: S,
    config: SamplerConfig,
}

impl<S: UniformSource> GaussianSampler<S> {
    /// Creates a sampler with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, SamplerConfig::default())
    }

    /// Creates a sampler with an explicit configuration.
    pub fn with_config(source: S, config: SamplerConfig) -> Self {
        Self { source, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Mutable access to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Draws one value from `N(mean, std_dev²)` reshaped by `skew`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `std_dev ≤ 0` or a value is not finite. No
    /// uniform is consumed in that case.
    pub fn sample(&mut self, mean: f64, std_dev: f64, skew: f64) -> Result<f64> {
        let params = GaussianParams::new(mean, std_dev, skew)?;
        Ok(self.sample_params(&params))
    }

    /// Draws one value for an already validated request.
    #[inline]
    pub fn sample_params(&mut self, params: &GaussianParams) -> f64 {
        let z0 = box_muller::standard_normal(&mut self.source);
        self.config.skew_policy.apply(
            z0,
            params.mean(),
            params.std_dev(),
            params.skew(),
            &mut self.source,
        )
    }

    /// Draws one value inside `[min, max]` by rejection sampling.
    ///
    /// `mean` defaults to the midpoint and `std_dev` to `(max − min) / 6`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `min ≥ max` or the resolved `std_dev ≤ 0`.
    /// `SamplingExhausted` only when the configuration caps attempts.
    pub fn sample_bounded(
        &mut self,
        min: f64,
        max: f64,
        mean: Option<f64>,
        std_dev: Option<f64>,
        skew: f64,
    ) -> Result<f64> {
        let params = BoundedParams::new(min, max, mean, std_dev, skew)?;
        self.sample_bounded_params(&params)
    }

    /// Rejection loop for an already validated bounded request.
    ///
    /// # Errors
    ///
    /// `SamplingExhausted` when the attempt cap is reached.
    pub fn sample_bounded_params(&mut self, params: &BoundedParams) -> Result<f64> {
        let resolved = params.resolved();
        let cap = self.config.max_attempts.map(|n| n.get());
        let mut attempts = 0usize;

        loop {
            let value = self.sample_params(&resolved);
            attempts += 1;
            if params.contains(value) {
                return Ok(value);
            }
            trace!(attempts, value, "rejected draw outside bounds");

            if cap == Some(attempts) {
                debug!(
                    attempts,
                    min = params.min(),
                    max = params.max(),
                    "bounded sampling exhausted its attempt cap"
                );
                return Err(SamplerError::SamplingExhausted {
                    attempts,
                    min: params.min(),
                    max: params.max(),
                });
            }
        }
    }

    /// Draws one value for a resolved request.
    ///
    /// # Errors
    ///
    /// `SamplingExhausted` for a capped bounded request.
    pub fn sample_request(&mut self, request: &SampleRequest) -> Result<f64> {
        match request {
            SampleRequest::Unbounded(params) => Ok(self.sample_params(params)),
            SampleRequest::Bounded(params) => self.sample_bounded_params(params),
        }
    }

    /// Unified entry point.
    ///
    /// A complete `mean`/`std_dev` pair wins over bounds, which are then
    /// ignored. Otherwise a complete `min`/`max` pair selects bounded
    /// sampling with any lone `mean`/`std_dev` as overrides.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when neither pair is complete, or as for
    /// [`sample`](Self::sample) / [`sample_bounded`](Self::sample_bounded).
    pub fn generate(&mut self, params: &GenerateParams) -> Result<f64> {
        let request = params.resolve()?;
        self.sample_request(&request)
    }

    /// Fills `buffer` with draws for `request`.
    ///
    /// On error the buffer may be partially written.
    pub fn fill(&mut self, buffer: &mut [f64], request: &SampleRequest) -> Result<()> {
        for value in buffer.iter_mut() {
            *value = self.sample_request(request)?;
        }
        Ok(())
    }
}
