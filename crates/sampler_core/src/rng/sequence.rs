//! Replay source for deterministic tests.

use super::UniformSource;
use crate::error::{Result, SamplerError};

/// Replays a fixed list of "uniform" values, wrapping around at the end.
///
/// Every value must lie in `[0, 1)` and at least one must be non-zero, so
/// the Box-Muller redraw of a zero `u1` always terminates.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::{SequenceSource, UniformSource};
///
/// let mut stub = SequenceSource::new(vec![0.5, 0.5, 0.1, 0.9]).unwrap();
/// let drawn: Vec<f64> = (0..5).map(|_| stub.next_uniform()).collect();
/// assert_eq!(drawn, vec![0.5, 0.5, 0.1, 0.9, 0.5]);
/// assert_eq!(stub.draws(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
    draws: usize,
}

impl SequenceSource {
    /// Creates a replay source, validating the sequence.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the sequence is empty, holds a value outside
    /// `[0, 1)`, or consists only of zeros.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(SamplerError::invalid("replay sequence must not be empty"));
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(SamplerError::invalid(format!(
                "replay value {} is outside [0, 1)",
                bad
            )));
        }
        if values.iter().all(|&v| v == 0.0) {
            return Err(SamplerError::invalid(
                "replay sequence must contain a non-zero value",
            ));
        }
        Ok(Self {
            values,
            cursor: 0,
            draws: 0,
        })
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Rewinds to the first value and clears the draw counter.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.draws = 0;
    }
}

impl UniformSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.draws += 1;
        value
    }
}
