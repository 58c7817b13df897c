//! # Gaussian Sampling
//!
//! Box-Muller sampling with optional skew and rejection-sampled bounds.
//!
//! ## Module Structure
//!
//! - [`box_muller`]: uniform pair → standard normal variate
//! - [`skew`]: the two skew policies (`Cubic` is the default)
//! - [`params`]: validated request types and the unified-entry precedence
//! - [`config`]: per-sampler configuration (skew policy, attempt cap)
//! - `gaussian`: [`GaussianSampler`] over an injected [`UniformSource`]
//! - `distribution`: `rand_distr::Distribution` adapters
//! - `batch`: reproducible parallel batches
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::sampler::{gaussian_random, bounded_gaussian_random, generate_gaussian_random, GenerateParams};
//!
//! let x = gaussian_random(0.0, 1.0, 0.0).unwrap();
//! let y = bounded_gaussian_random(10.0, 20.0, None, None, 0.0).unwrap();
//! assert!((10.0..=20.0).contains(&y));
//!
//! let params = GenerateParams::new().min(0.0).max(100.0).skew(0.5);
//! let z = generate_gaussian_random(&params).unwrap();
//! assert!((0.0..=100.0).contains(&z));
//! # let _ = x;
//! ```
//!
//! The free functions draw from the thread-local generator with the default
//! configuration. Use [`GaussianSampler`] to inject a seeded or replayed
//! source, choose the skew policy, or cap the rejection loop.

pub mod box_muller;
pub mod config;
pub mod params;
pub mod skew;

mod batch;
mod distribution;
mod gaussian;

pub use batch::{par_sample, CHUNK_SIZE};
pub use config::SamplerConfig;
pub use distribution::{BoundedSkewNormal, SkewNormal};
pub use gaussian::GaussianSampler;
pub use params::{BoundedParams, GaussianParams, GenerateParams, SampleRequest};
pub use skew::SkewPolicy;

use crate::error::Result;
use crate::rng::{RngSource, UniformSource};

fn thread_sampler() -> GaussianSampler<impl UniformSource> {
    GaussianSampler::new(RngSource::new(rand::thread_rng()))
}

/// Draws one value from `N(mean, std_dev²)` reshaped by `skew`.
///
/// # Errors
///
/// `InvalidParameter` when `std_dev ≤ 0`.
pub fn gaussian_random(mean: f64, std_dev: f64, skew: f64) -> Result<f64> {
    thread_sampler().sample(mean, std_dev, skew)
}

/// Draws one value inside `[min, max]`.
///
/// The rejection loop is unbounded.
///
/// # Errors
///
/// `InvalidParameter` when `min ≥ max` or the resolved `std_dev ≤ 0`.
pub fn bounded_gaussian_random(
    min: f64,
    max: f64,
    mean: Option<f64>,
    std_dev: Option<f64>,
    skew: f64,
) -> Result<f64> {
    thread_sampler().sample_bounded(min, max, mean, std_dev, skew)
}

/// Unified entry point; see [`GenerateParams`] for the precedence rules.
///
/// # Errors
///
/// `InvalidParameter` when neither a `mean`/`std_dev` nor a `min`/`max`
/// pair is complete.
pub fn generate_gaussian_random(params: &GenerateParams) -> Result<f64> {
    thread_sampler().generate(params)
}
