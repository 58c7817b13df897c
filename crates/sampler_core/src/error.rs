//! Error types for the sampler.
//!
//! All precondition checks run eagerly, before any value is drawn from the
//! uniform source, so a failing call never consumes randomness and never
//! yields a partial result.

use thiserror::Error;

/// Errors raised by the sampling functions.
///
/// # Variants
///
/// - `InvalidParameter`: a request violated a precondition
///   (non-positive standard deviation, inverted bounds, missing parameters)
/// - `SamplingExhausted`: a bounded request hit its configured attempt cap
///
/// # Examples
///
/// ```
/// use sampler_core::SamplerError;
///
/// let err = SamplerError::InvalidParameter("std_dev must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid parameter: std_dev must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    /// A request parameter violated a precondition.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The bounded sampler rejected every draw up to the configured cap.
    #[error("Sampling exhausted: no value in [{min}, {max}] after {attempts} attempts")]
    SamplingExhausted {
        /// Number of rejected attempts
        attempts: usize,
        /// Lower bound of the request
        min: f64,
        /// Upper bound of the request
        max: f64,
    },
}

impl SamplerError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SamplerError::InvalidParameter(msg.into())
    }

    /// Returns `true` for precondition failures.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SamplerError::InvalidParameter(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SamplerError>;
