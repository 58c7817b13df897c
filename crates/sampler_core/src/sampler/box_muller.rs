//! Box-Muller transform (trigonometric form).
//!
//! Two independent uniform variates `u1 ∈ (0, 1)` and `u2 ∈ [0, 1)` map to
//! one standard normal variate:
//!
//! ```text
//! z0 = sqrt(-2 ln u1) · cos(2π u2)
//! ```
//!
//! The companion sine variate is discarded so that every call stays
//! stateless.

use std::f64::consts::TAU;

use crate::rng::UniformSource;

/// Applies the transform to a pair of uniforms.
///
/// `u1` must be strictly positive; `u1 = 0` would take the logarithm of zero.
///
/// # Examples
///
/// ```
/// use sampler_core::sampler::box_muller::transform;
///
/// // u2 = 0.5 puts the cosine at -1
/// let z = transform(0.5, 0.5);
/// assert!((z + (2.0_f64 * 2.0_f64.ln()).sqrt()).abs() < 1e-15);
/// ```
#[inline]
pub fn transform(u1: f64, u2: f64) -> f64 {
    debug_assert!(u1 > 0.0, "u1 must be strictly positive");
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Draws one standard normal variate from `source`.
///
/// Consumes two uniforms. A `u1` of exactly zero is discarded and redrawn
/// before `u2` is taken.
#[inline]
pub fn standard_normal<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    let mut u1 = source.next_uniform();
    while u1 <= 0.0 {
        u1 = source.next_uniform();
    }
    let u2 = source.next_uniform();
    transform(u1, u2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{SamplerRng, SequenceSource};
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_known_values() {
        // cos(0) = 1
        assert_relative_eq!(
            transform(0.1, 0.0),
            (-2.0 * 0.1_f64.ln()).sqrt(),
            epsilon = 1e-15
        );
        // cos(π/2) ≈ 0
        assert!(transform(0.3, 0.25).abs() < 1e-15);
        // u1 = 1 collapses the radius
        assert_eq!(transform(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_standard_normal_consumes_two_draws() {
        let mut stub = SequenceSource::new(vec![0.5, 0.5, 0.1, 0.9]).unwrap();
        let z = standard_normal(&mut stub);
        assert_eq!(stub.draws(), 2);
        assert_eq!(z, transform(0.5, 0.5));

        let z = standard_normal(&mut stub);
        assert_eq!(stub.draws(), 4);
        assert_eq!(z, transform(0.1, 0.9));
    }

    #[test]
    fn test_zero_u1_is_redrawn() {
        let mut stub = SequenceSource::new(vec![0.0, 0.0, 0.4, 0.2]).unwrap();
        let z = standard_normal(&mut stub);
        assert_eq!(stub.draws(), 4);
        assert_eq!(z, transform(0.4, 0.2));
        assert!(z.is_finite());
    }

    #[test]
    fn test_standard_normal_moments() {
        let mut rng = SamplerRng::from_seed(42);
        let n = 100_000;
        let samples: Vec<f64> = (0..n).map(|_| standard_normal(&mut rng)).collect();

        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

        assert!(mean.abs() < 0.02, "mean {} too far from 0", mean);
        assert!((var - 1.0).abs() < 0.03, "variance {} too far from 1", var);
    }
}
