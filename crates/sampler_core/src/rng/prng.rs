//! Pseudo-random uniform sources backed by the `rand` crate.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::UniformSource;

/// Seeded random source for reproducible sampling runs.
///
/// Wraps `rand::rngs::StdRng` and remembers its seed so a run can be
/// reported and replayed.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{SamplerRng, UniformSource};
///
/// let mut rng1 = SamplerRng::from_seed(42);
/// let mut rng2 = SamplerRng::from_seed(42);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.next_uniform(), rng2.next_uniform());
/// assert_eq!(rng1.seed(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct SamplerRng {
    inner: StdRng,
    seed: u64,
}

impl SamplerRng {
    /// Creates a source initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a source with a seed taken from the thread-local generator.
    ///
    /// The chosen seed is still available through [`SamplerRng::seed`].
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().gen())
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl UniformSource for SamplerRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.inner.gen()
    }
}

/// Adapter turning any `rand` generator into a [`UniformSource`].
///
/// ```rust
/// use sampler_core::rng::{RngSource, UniformSource};
///
/// let mut source = RngSource::new(rand::thread_rng());
/// let u = source.next_uniform();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: RngCore> RngSource<R> {
    /// Wraps a generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: RngCore> UniformSource for RngSource<R> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.0.gen()
    }
}
