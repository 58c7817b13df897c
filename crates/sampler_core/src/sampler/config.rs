//! Sampler configuration.

use std::num::NonZeroUsize;

use super::skew::SkewPolicy;
use crate::error::{Result, SamplerError};

/// Configuration shared by every call on a [`GaussianSampler`](super::GaussianSampler).
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use sampler_core::sampler::{SamplerConfig, SkewPolicy};
///
/// // Cubic skew, unbounded rejection loop
/// let config = SamplerConfig::default();
/// assert_eq!(config.skew_policy, SkewPolicy::Cubic);
/// assert!(config.max_attempts.is_none());
///
/// // Opt into bounded latency
/// let capped = SamplerConfig::default().with_max_attempts(10_000).unwrap();
/// assert_eq!(capped.max_attempts, NonZeroUsize::new(10_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfig {
    /// Skew scheme used by every call.
    pub skew_policy: SkewPolicy,

    /// Attempt cap for the bounded rejection loop.
    ///
    /// `None` keeps the loop unbounded. When set, a bounded call that rejects
    /// this many draws returns `SamplerError::SamplingExhausted`.
    pub max_attempts: Option<NonZeroUsize>,
}

impl SamplerConfig {
    /// Creates a configuration with the given policy and no attempt cap.
    pub fn new(skew_policy: SkewPolicy) -> Self {
        Self {
            skew_policy,
            max_attempts: None,
        }
    }

    /// Sets the skew policy.
    pub fn with_skew_policy(mut self, skew_policy: SkewPolicy) -> Self {
        self.skew_policy = skew_policy;
        self
    }

    /// Caps the bounded rejection loop.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `max_attempts` is zero.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Result<Self> {
        let cap = NonZeroUsize::new(max_attempts)
            .ok_or_else(|| SamplerError::invalid("max_attempts must be > 0"))?;
        self.max_attempts = Some(cap);
        Ok(self)
    }

    /// Removes any attempt cap.
    pub fn unbounded(mut self) -> Self {
        self.max_attempts = None;
        self
    }
}
