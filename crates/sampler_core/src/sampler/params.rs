//! Request parameters and their validation.
//!
//! Every constructor validates eagerly, so once a request value exists it is
//! known to be sampleable and no uniform draw is wasted on a bad request.

use crate::error::{Result, SamplerError};

fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SamplerError::invalid(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

fn ensure_std_dev(std_dev: f64) -> Result<()> {
    ensure_finite("std_dev", std_dev)?;
    if std_dev > 0.0 {
        Ok(())
    } else {
        Err(SamplerError::invalid(format!(
            "std_dev must be positive, got {}",
            std_dev
        )))
    }
}

fn ensure_bounds(min: f64, max: f64) -> Result<()> {
    ensure_finite("min", min)?;
    ensure_finite("max", max)?;
    if min < max {
        Ok(())
    } else {
        Err(SamplerError::invalid(format!(
            "min must be less than max, got min = {}, max = {}",
            min, max
        )))
    }
}

/// Unbounded request: `mean`, `std_dev > 0` and `skew`.
///
/// # Examples
///
/// ```
/// use sampler_core::sampler::GaussianParams;
///
/// let params = GaussianParams::new(50.0, 10.0, 0.0).unwrap();
/// assert_eq!(params.std_dev(), 10.0);
///
/// assert!(GaussianParams::new(0.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianParams {
    mean: f64,
    std_dev: f64,
    skew: f64,
}

impl GaussianParams {
    /// Validates and builds the request.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `std_dev ≤ 0` or any value is not finite.
    pub fn new(mean: f64, std_dev: f64, skew: f64) -> Result<Self> {
        ensure_finite("mean", mean)?;
        ensure_std_dev(std_dev)?;
        ensure_finite("skew", skew)?;
        Ok(Self {
            mean,
            std_dev,
            skew,
        })
    }

    /// Standard normal request (`mean = 0`, `std_dev = 1`, no skew).
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
            skew: 0.0,
        }
    }

    /// Centre of the distribution.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Scale of the distribution.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Skew amount; 0 means symmetric.
    pub fn skew(&self) -> f64 {
        self.skew
    }
}

impl Default for GaussianParams {
    fn default() -> Self {
        Self::standard()
    }
}

/// Bounded request over `[min, max]`.
///
/// When omitted, `mean` defaults to the midpoint and `std_dev` to
/// `(max − min) / 6`, which places ±3σ on the bounds.
///
/// # Examples
///
/// ```
/// use sampler_core::sampler::BoundedParams;
///
/// let params = BoundedParams::new(10.0, 20.0, None, None, 0.0).unwrap();
/// let resolved = params.resolved();
/// assert_eq!(resolved.mean(), 15.0);
/// assert!((resolved.std_dev() - 10.0 / 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedParams {
    min: f64,
    max: f64,
    resolved: GaussianParams,
}

impl BoundedParams {
    /// Validates the bounds, fills in defaults and validates the result.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `min ≥ max`, when an explicit `std_dev` is not
    /// positive, or when any value is not finite.
    pub fn new(
        min: f64,
        max: f64,
        mean: Option<f64>,
        std_dev: Option<f64>,
        skew: f64,
    ) -> Result<Self> {
        ensure_bounds(min, max)?;
        // Halve and divide before combining so bounds near ±f64::MAX stay finite
        let mean = mean.unwrap_or(min / 2.0 + max / 2.0);
        let std_dev = std_dev.unwrap_or(max / 6.0 - min / 6.0);
        let resolved = GaussianParams::new(mean, std_dev, skew)?;
        Ok(Self { min, max, resolved })
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Effective unbounded parameters after defaulting.
    pub fn resolved(&self) -> GaussianParams {
        self.resolved
    }

    /// `true` when `value` lies in `[min, max]`.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// A validated request, ready to sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleRequest {
    /// Plain (optionally skewed) Gaussian.
    Unbounded(GaussianParams),
    /// Rejection-sampled within bounds.
    Bounded(BoundedParams),
}

impl From<GaussianParams> for SampleRequest {
    fn from(params: GaussianParams) -> Self {
        SampleRequest::Unbounded(params)
    }
}

impl From<BoundedParams> for SampleRequest {
    fn from(params: BoundedParams) -> Self {
        SampleRequest::Bounded(params)
    }
}

/// Loose parameter set for the unified entry point.
///
/// Resolution order:
/// 1. `mean` and `std_dev` both present: unbounded sampling; any bounds are
///    ignored.
/// 2. `min` and `max` both present: bounded sampling, with a lone `mean` or
///    `std_dev` overriding the bounded defaults.
/// 3. Otherwise the request is invalid.
///
/// `skew` defaults to 0.
///
/// # Examples
///
/// ```
/// use sampler_core::sampler::{GenerateParams, SampleRequest};
///
/// let request = GenerateParams::new().mean(88.0).std_dev(5.0).skew(-0.5).resolve().unwrap();
/// assert!(matches!(request, SampleRequest::Unbounded(_)));
///
/// let request = GenerateParams::new().min(0.0).max(10.0).mean(3.0).resolve().unwrap();
/// assert!(matches!(request, SampleRequest::Bounded(_)));
///
/// assert!(GenerateParams::new().resolve().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerateParams {
    /// Lower bound
    pub min: Option<f64>,
    /// Upper bound
    pub max: Option<f64>,
    /// Centre
    pub mean: Option<f64>,
    /// Scale
    pub std_dev: Option<f64>,
    /// Skew amount
    pub skew: f64,
}

impl GenerateParams {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lower bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the mean.
    pub fn mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }

    /// Sets the standard deviation.
    pub fn std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = Some(std_dev);
        self
    }

    /// Sets the skew.
    pub fn skew(mut self, skew: f64) -> Self {
        self.skew = skew;
        self
    }

    /// Applies the precedence rules and validates the chosen branch.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when neither pair is complete or the chosen branch
    /// fails its own validation.
    pub fn resolve(&self) -> Result<SampleRequest> {
        match (self.mean, self.std_dev, self.min, self.max) {
            (Some(mean), Some(std_dev), _, _) => {
                Ok(GaussianParams::new(mean, std_dev, self.skew)?.into())
            }
            (mean, std_dev, Some(min), Some(max)) => {
                Ok(BoundedParams::new(min, max, mean, std_dev, self.skew)?.into())
            }
            _ => Err(SamplerError::invalid(
                "either a min/max pair or a mean/stdDev pair must be supplied",
            )),
        }
    }
}
