//! Parallel batch sampling.
//!
//! The output buffer is split into fixed-size chunks and each chunk gets its
//! own `SamplerRng`, seeded from `(base_seed, chunk_index)`. Results depend
//! only on the seed, never on the number of rayon worker threads.

use rayon::prelude::*;

use super::config::SamplerConfig;
use super::gaussian::GaussianSampler;
use super::params::SampleRequest;
use crate::error::Result;
use crate::rng::SamplerRng;

/// Samples per independently seeded chunk.
pub const CHUNK_SIZE: usize = 4096;

/// SplitMix64 finaliser, used to derive well-separated chunk seeds.
#[inline]
fn chunk_seed(base_seed: u64, chunk_index: usize) -> u64 {
    let mut z = base_seed.wrapping_add((chunk_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Draws `count` values for `request` in parallel.
///
/// # Errors
///
/// `SamplingExhausted` if any chunk exhausts a configured attempt cap.
///
/// # Examples
///
/// ```rust
/// use sampler_core::sampler::{par_sample, GaussianParams, SamplerConfig};
///
/// let request = GaussianParams::new(0.0, 1.0, 0.0).unwrap().into();
/// let a = par_sample(&request, SamplerConfig::default(), 10_000, 42).unwrap();
/// let b = par_sample(&request, SamplerConfig::default(), 10_000, 42).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn par_sample(
    request: &SampleRequest,
    config: SamplerConfig,
    count: usize,
    base_seed: u64,
) -> Result<Vec<f64>> {
    let mut samples = vec![0.0; count];
    samples
        .par_chunks_mut(CHUNK_SIZE)
        .enumerate()
        .try_for_each(|(index, chunk)| {
            let rng = SamplerRng::from_seed(chunk_seed(base_seed, index));
            GaussianSampler::with_config(rng, config).fill(chunk, request)
        })?;
    Ok(samples)
}
