//! # sampler_core: Skewed and Bounded Gaussian Sampling
//!
//! Pseudo-random numbers approximating a normal distribution, with optional
//! skew and optional hard bounds.
//!
//! - Box-Muller transform (`sampler::box_muller`)
//! - Skew policies: cubic correction (default) or mean-flip (`sampler::skew`)
//! - Rejection sampling into `[min, max]`, unbounded unless capped
//!   (`sampler::SamplerConfig`)
//! - Injectable uniform sources for reproducible runs (`rng`)
//! - Summary statistics and integer histograms (`stats`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::rng::SamplerRng;
//! use sampler_core::sampler::{GaussianSampler, GenerateParams};
//!
//! let mut sampler = GaussianSampler::new(SamplerRng::from_seed(12345));
//!
//! // Unbounded, slightly left-skewed
//! let value = sampler.sample(88.0, 5.0, -0.5).unwrap();
//! assert!(value.is_finite());
//!
//! // Bounded with defaults: mean = 15, std_dev = 10/6
//! let bounded = sampler.sample_bounded(10.0, 20.0, None, None, 0.0).unwrap();
//! assert!((10.0..=20.0).contains(&bounded));
//!
//! // Unified entry point
//! let params = GenerateParams::new().min(0.0).max(1.0);
//! let unit = sampler.generate(&params).unwrap();
//! assert!((0.0..=1.0).contains(&unit));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: derive (de)serialisation for `SamplerConfig`, `SkewPolicy`,
//!   `GenerateParams` and the `stats` types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod rng;
pub mod sampler;
pub mod stats;

pub use error::{Result, SamplerError};
pub use sampler::{
    bounded_gaussian_random, gaussian_random, generate_gaussian_random, GaussianSampler,
    GenerateParams, SamplerConfig, SkewPolicy,
};
