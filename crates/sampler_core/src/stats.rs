//! Summary statistics and integer histograms over sampled values.
//!
//! These back the command-line consumer, which draws many values and charts
//! them, and the statistical tests.

use crate::error::{Result, SamplerError};

/// Largest number of bins a [`Histogram`] will allocate.
pub const MAX_BINS: usize = 1_000_000;

/// Moments and extremes of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleSummary {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator)
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl SampleSummary {
    /// Summarises `samples`; `None` for an empty slice.
    ///
    /// ```
    /// use sampler_core::stats::SampleSummary;
    ///
    /// let summary = SampleSummary::from_samples(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(summary.mean, 2.0);
    /// assert_eq!(summary.std_dev, 1.0);
    /// assert!(SampleSummary::from_samples(&[]).is_none());
    /// ```
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let ss: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            0.0
        };
        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        Some(Self {
            count,
            mean,
            std_dev,
            min,
            max,
        })
    }
}

/// Counts of rounded values over consecutive integers.
///
/// Bin `i` counts values whose `round()` equals `lower + i`, for
/// `lower = floor(min)` through `upper = ceil(max)`. Values rounding outside
/// that range are tallied in `outliers`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    lower: i64,
    counts: Vec<u64>,
    outliers: u64,
}

impl Histogram {
    /// Buckets `samples` over `[min, max]`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `min ≥ max`, either bound is not finite, or
    /// the range spans more than [`MAX_BINS`] integers.
    ///
    /// ```
    /// use sampler_core::stats::Histogram;
    ///
    /// let h = Histogram::from_samples(&[0.4, 0.6, 1.2, 2.5, 9.0], 0.0, 3.0).unwrap();
    /// assert_eq!(h.counts(), &[1, 2, 0, 1]);
    /// assert_eq!(h.outliers(), 1);
    /// ```
    pub fn from_samples(samples: &[f64], min: f64, max: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(SamplerError::invalid(format!(
                "histogram range must satisfy min < max, got [{}, {}]",
                min, max
            )));
        }
        let lower = min.floor();
        let upper = max.ceil();
        // Measured in f64 so ranges beyond i64 are caught before any cast
        let span = upper - lower + 1.0;
        if span > MAX_BINS as f64 {
            return Err(SamplerError::invalid(format!(
                "histogram range [{}, {}] needs {} bins, limit is {}",
                min, max, span, MAX_BINS
            )));
        }
        let lower = lower as i64;
        let upper = upper as i64;
        let bins = usize::try_from(upper - lower + 1)
            .map_err(|_| SamplerError::invalid("histogram bin count out of range"))?;
        let mut counts = vec![0u64; bins];
        let mut outliers = 0u64;

        for &value in samples {
            let bucket = value.round();
            if bucket.is_finite() && bucket >= lower as f64 && bucket <= upper as f64 {
                counts[(bucket as i64 - lower) as usize] += 1;
            } else {
                outliers += 1;
            }
        }

        Ok(Self {
            lower,
            counts,
            outliers,
        })
    }

    /// Integer label of the first bin.
    pub fn lower(&self) -> i64 {
        self.lower
    }

    /// Per-bin counts.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Values that rounded outside the range.
    pub fn outliers(&self) -> u64 {
        self.outliers
    }

    /// `(label, count)` pairs.
    pub fn bins(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(move |(i, &c)| (self.lower + i as i64, c))
    }

    /// Largest bin count.
    pub fn peak(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Label of the fullest bin (first one on ties).
    pub fn mode(&self) -> Option<i64> {
        let peak = self.peak();
        if peak == 0 {
            return None;
        }
        self.bins().find(|&(_, c)| c == peak).map(|(label, _)| label)
    }
}
