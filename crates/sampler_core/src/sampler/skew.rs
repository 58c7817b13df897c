//! Skew policies.
//!
//! Two asymmetry schemes exist and they produce different distributions for
//! the same `skew` value. A sampler is configured with exactly one of them.
//!
//! - [`SkewPolicy::Cubic`] (default): `z = z0 + skew·(z0³ − z0)`, applied to
//!   the standard variate before scaling. For `|z0| > 1` the correction
//!   pushes the value further out in the direction of `skew·z0`; inside
//!   `(-1, 1)` it pulls the other way, so the tails and the centre move in
//!   opposite directions.
//! - [`SkewPolicy::MeanFlip`]: scale first, then with probability
//!   `|skew|/4` reflect a value lying on the disfavoured side of the mean.

use std::fmt;
use std::str::FromStr;

use crate::error::SamplerError;
use crate::rng::UniformSource;

/// Probability of a reflection per unit of `|skew|` under [`SkewPolicy::MeanFlip`].
pub const MEAN_FLIP_RATE: f64 = 0.25;

/// How `skew` reshapes the normal variate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SkewPolicy {
    /// Cubic correction of the standard variate.
    #[default]
    Cubic,
    /// Probabilistic reflection across the mean.
    MeanFlip,
}

impl SkewPolicy {
    /// Applies the policy to a standard variate `z0`, returning the scaled
    /// value.
    ///
    /// `MeanFlip` draws one extra uniform from `source` when `skew != 0`;
    /// `Cubic` never touches the source.
    pub fn apply<S: UniformSource + ?Sized>(
        self,
        z0: f64,
        mean: f64,
        std_dev: f64,
        skew: f64,
        source: &mut S,
    ) -> f64 {
        match self {
            SkewPolicy::Cubic => cubic_skew(z0, skew) * std_dev + mean,
            SkewPolicy::MeanFlip => {
                let value = z0 * std_dev + mean;
                if skew == 0.0 {
                    return value;
                }
                let p = source.next_uniform();
                mean_flip(value, mean, skew, p)
            }
        }
    }

    /// Name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkewPolicy::Cubic => "cubic",
            SkewPolicy::MeanFlip => "mean-flip",
        }
    }
}

impl FromStr for SkewPolicy {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cubic" => Ok(SkewPolicy::Cubic),
            "mean-flip" | "mean_flip" | "meanflip" => Ok(SkewPolicy::MeanFlip),
            _ => Err(SamplerError::invalid(format!(
                "unknown skew policy: {}. Must be one of: cubic, mean-flip",
                s
            ))),
        }
    }
}

impl fmt::Display for SkewPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cubic skew of a standard variate: `z0 + skew·(z0³ − z0)`.
///
/// # Examples
///
/// ```
/// use sampler_core::sampler::skew::cubic_skew;
///
/// assert_eq!(cubic_skew(2.0, 0.0), 2.0);
/// assert_eq!(cubic_skew(2.0, 0.5), 2.0 + 0.5 * 6.0);
/// ```
#[inline]
pub fn cubic_skew(z0: f64, skew: f64) -> f64 {
    z0 + skew * (z0 * z0 * z0 - z0)
}

/// Mean-flip reflection given the Bernoulli draw `p ∈ [0, 1)`.
///
/// Reflects `value` across `mean` when `p < |skew|·0.25` and `value` sits on
/// the side opposite to the sign of `skew`.
#[inline]
pub fn mean_flip(value: f64, mean: f64, skew: f64, p: f64) -> f64 {
    if p >= skew.abs() * MEAN_FLIP_RATE {
        return value;
    }
    if (skew > 0.0 && value < mean) || (skew < 0.0 && value > mean) {
        mean + (mean - value)
    } else {
        value
    }
}
