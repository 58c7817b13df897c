//! # Uniform Random Sources
//!
//! The sampler never reaches for a global generator. Every draw goes through
//! the [`UniformSource`] trait, which callers inject.
//!
//! ## Module Structure
//!
//! - `prng`: seeded `StdRng` wrapper and an adapter for any `rand` generator
//! - `sequence`: replay stub for deterministic tests of the transform maths
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{SamplerRng, SequenceSource, UniformSource};
//!
//! // Seeded, reproducible source
//! let mut rng = SamplerRng::from_seed(12345);
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Fixed replay sequence
//! let mut stub = SequenceSource::new(vec![0.5, 0.25]).unwrap();
//! assert_eq!(stub.next_uniform(), 0.5);
//! assert_eq!(stub.next_uniform(), 0.25);
//! assert_eq!(stub.next_uniform(), 0.5);
//! ```

mod prng;
mod sequence;

pub use prng::{RngSource, SamplerRng};
pub use sequence::SequenceSource;

/// A source of uniform variates on `[0, 1)`.
///
/// Implementations may return exactly `0.0`; the Box-Muller step redraws in
/// that case.
pub trait UniformSource {
    /// Returns the next uniform variate in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

#[cfg(test)]
mod tests;
