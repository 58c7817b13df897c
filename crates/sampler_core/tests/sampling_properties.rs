//! Integration tests for the public sampling surface.
//!
//! Covers the statistical range property, the hard bounds guarantee,
//! precondition enforcement, default derivation, determinism under a replay
//! source and the cubic skew orientation.

use approx::assert_relative_eq;
use proptest::prelude::*;
use sampler_core::rng::{SamplerRng, SequenceSource};
use sampler_core::sampler::box_muller::transform;
use sampler_core::sampler::skew::cubic_skew;
use sampler_core::sampler::{BoundedParams, GaussianSampler, SamplerConfig};
use sampler_core::stats::SampleSummary;
use sampler_core::{
    bounded_gaussian_random, gaussian_random, generate_gaussian_random, GenerateParams,
    SamplerError, SkewPolicy,
};

#[test]
fn test_range_property() {
    let mut sampler = GaussianSampler::new(SamplerRng::from_seed(31415));
    let samples: Vec<f64> = (0..10_000)
        .map(|_| sampler.sample(50.0, 10.0, 0.0).unwrap())
        .collect();

    let summary = SampleSummary::from_samples(&samples).unwrap();
    assert!((summary.mean - 50.0).abs() < 1.0, "mean {}", summary.mean);
    assert!((summary.std_dev - 10.0).abs() < 1.0, "std {}", summary.std_dev);
}

#[test]
fn test_bounds_property_with_thread_rng() {
    for _ in 0..10_000 {
        let value = bounded_gaussian_random(10.0, 20.0, None, None, 0.0).unwrap();
        assert!((10.0..=20.0).contains(&value));
    }
}

#[test]
fn test_precondition_enforcement() {
    assert!(matches!(
        gaussian_random(0.0, 0.0, 0.0),
        Err(SamplerError::InvalidParameter(_))
    ));
    assert!(matches!(
        bounded_gaussian_random(20.0, 10.0, None, None, 0.0),
        Err(SamplerError::InvalidParameter(_))
    ));
    assert!(matches!(
        generate_gaussian_random(&GenerateParams::new()),
        Err(SamplerError::InvalidParameter(_))
    ));
    // An explicit non-positive override still fails after defaulting
    assert!(matches!(
        bounded_gaussian_random(0.0, 10.0, None, Some(0.0), 0.0),
        Err(SamplerError::InvalidParameter(_))
    ));
}

#[test]
fn test_bounds_near_f64_limits() {
    for _ in 0..1_000 {
        let value = bounded_gaussian_random(-1e308, 1e308, None, None, 0.0).unwrap();
        assert!((-1e308..=1e308).contains(&value));
    }

    let mut sampler = GaussianSampler::new(SamplerRng::from_seed(11));
    let value = sampler
        .sample_bounded(-f64::MAX, f64::MAX, None, None, 0.5)
        .unwrap();
    assert!(value.is_finite());
}

#[test]
fn test_default_derivation() {
    let params = BoundedParams::new(10.0, 20.0, None, None, 0.0).unwrap();
    assert_eq!(params.resolved().mean(), 15.0);
    assert_relative_eq!(params.resolved().std_dev(), 1.6667, epsilon = 1e-4);

    // Same replay stream through the defaulted and the explicit request
    let stream = vec![0.5, 0.5, 0.1, 0.9, 0.7, 0.3];
    let mut defaulted = GaussianSampler::new(SequenceSource::new(stream.clone()).unwrap());
    let mut explicit = GaussianSampler::new(SequenceSource::new(stream).unwrap());
    for _ in 0..6 {
        let a = defaulted.sample_bounded(10.0, 20.0, None, None, 0.0).unwrap();
        let b = explicit
            .sample_bounded(10.0, 20.0, Some(15.0), Some(10.0 / 6.0), 0.0)
            .unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_determinism_under_replay() {
    let run = |policy: SkewPolicy| {
        let source = SequenceSource::new(vec![0.5, 0.5, 0.1, 0.9]).unwrap();
        let mut sampler = GaussianSampler::with_config(source, SamplerConfig::new(policy));
        (0..16)
            .map(|_| sampler.sample(0.0, 1.0, 0.6).unwrap().to_bits())
            .collect::<Vec<u64>>()
    };
    assert_eq!(run(SkewPolicy::Cubic), run(SkewPolicy::Cubic));
    assert_eq!(run(SkewPolicy::MeanFlip), run(SkewPolicy::MeanFlip));

    let mut sampler = GaussianSampler::new(SequenceSource::new(vec![0.5, 0.5, 0.1, 0.9]).unwrap());
    let first = sampler.sample(0.0, 1.0, 0.0).unwrap();
    assert_eq!(first, transform(0.5, 0.5));
    let second = sampler.sample(0.0, 1.0, 0.0).unwrap();
    assert_eq!(second, transform(0.1, 0.9));
}

#[test]
fn test_cubic_skew_orientation() {
    // |z0| > 1: correction grows with |skew|
    let z0 = 1.8;
    let shifts: Vec<f64> = [0.0, 0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|&k| (cubic_skew(z0, k) - z0).abs())
        .collect();
    assert!(shifts.windows(2).all(|w| w[1] > w[0]));

    // Positive skew: outer tail pushed outwards, centre pulled inwards
    assert!(cubic_skew(1.8, 0.5) - 1.8 > 0.0);
    assert!(cubic_skew(0.4, 0.5) - 0.4 < 0.0);
    assert!(cubic_skew(-0.4, 0.5) + 0.4 > 0.0);
    assert!(cubic_skew(-1.8, 0.5) + 1.8 < 0.0);
}

#[test]
fn test_end_to_end_scenario() {
    let params = GenerateParams::new().mean(88.0).std_dev(5.0).skew(-0.5);
    let samples: Vec<f64> = (0..1_000)
        .map(|_| generate_gaussian_random(&params).unwrap())
        .collect();

    assert!(samples.iter().all(|v| v.is_finite()));
    let summary = SampleSummary::from_samples(&samples).unwrap();
    assert!((summary.mean - 88.0).abs() < 2.0, "mean {}", summary.mean);
}

#[test]
fn test_attempt_cap_counts_exactly() {
    let source = SequenceSource::new(vec![0.5, 0.5]).unwrap();
    let config = SamplerConfig::default().with_max_attempts(7).unwrap();
    let mut sampler = GaussianSampler::with_config(source, config);

    // z0 = -sqrt(2 ln 2) ≈ -1.18 every time, always below min
    let err = sampler
        .sample_bounded(0.0, 1.0, Some(0.0), Some(1.0), 0.0)
        .unwrap_err();
    assert_eq!(
        err,
        SamplerError::SamplingExhausted {
            attempts: 7,
            min: 0.0,
            max: 1.0
        }
    );
    assert_eq!(sampler.source_mut().draws(), 14);
}

fn bounds_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-1e3..1e3_f64, 1e-3..1e3_f64).prop_map(|(min, width)| (min, min + width))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_bounded_values_stay_in_range(
        (min, max) in bounds_strategy(),
        skew in -1.0..1.0_f64,
        seed in any::<u64>(),
    ) {
        let mut sampler = GaussianSampler::new(SamplerRng::from_seed(seed));
        for _ in 0..100 {
            let value = sampler.sample_bounded(min, max, None, None, skew).unwrap();
            prop_assert!(min <= value && value <= max, "{} not in [{}, {}]", value, min, max);
        }
    }

    #[test]
    fn prop_non_positive_std_dev_rejected(
        mean in -1e6..1e6_f64,
        std_dev in -1e6..=0.0_f64,
        skew in -1.0..1.0_f64,
    ) {
        prop_assert!(gaussian_random(mean, std_dev, skew).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn prop_inverted_bounds_rejected(
        max in -1e6..1e6_f64,
        gap in 0.0..1e3_f64,
    ) {
        let min = max + gap;
        prop_assert!(bounded_gaussian_random(min, max, None, None, 0.0)
            .unwrap_err()
            .is_invalid_parameter());
    }

    #[test]
    fn prop_unbounded_pair_wins_over_bounds(
        mean in -1e3..1e3_f64,
        std_dev in 1e-3..1e2_f64,
        seed in any::<u64>(),
    ) {
        // Bounds that could never contain the draw are ignored
        let params = GenerateParams::new()
            .mean(mean)
            .std_dev(std_dev)
            .min(1e9)
            .max(1e9 + 1.0);
        let mut a = GaussianSampler::new(SamplerRng::from_seed(seed));
        let mut b = GaussianSampler::new(SamplerRng::from_seed(seed));
        prop_assert_eq!(
            a.generate(&params).unwrap().to_bits(),
            b.sample(mean, std_dev, 0.0).unwrap().to_bits()
        );
    }
}
