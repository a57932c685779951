use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use crate::error::{Result, TrainError};

// Shape of the synthetic income/value columns. Income is log-normal
// (right-skewed, like the median-income column of the housing data); the
// value responds linearly with Gaussian noise and is clamped to the
// characteristic [0.15, 5.0] range of the housing targets.
const INCOME_LOG_MEAN: f32 = 1.25;
const INCOME_LOG_STD: f32 = 0.45;
const VALUE_BASE: f32 = 0.45;
const VALUE_PER_INCOME: f32 = 0.42;
const VALUE_NOISE_STD: f32 = 0.55;
const VALUE_MIN: f32 = 0.15;
const VALUE_CAP: f32 = 5.0;

/// A single supervised sample (x, y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
}

/// A minimal in-memory dataset: one feature column and one target column,
/// aligned by index and immutable once constructed.
#[derive(Debug, Clone)]
pub struct InMemoryDataset {
    xs: Vec<f32>,
    ys: Vec<f32>,
}

impl InMemoryDataset {
    /// Creates a new dataset from owned columns.
    ///
    /// # Errors
    /// - `TrainError::EmptyDataset` if the columns are empty.
    /// - `TrainError::ShapeMismatch` if the columns disagree in length.
    pub fn new(xs: Vec<f32>, ys: Vec<f32>) -> Result<Self> {
        if xs.is_empty() {
            return Err(TrainError::EmptyDataset);
        }
        if xs.len() != ys.len() {
            return Err(TrainError::ShapeMismatch {
                what: "targets",
                got: ys.len(),
                expected: xs.len(),
            });
        }

        Ok(Self { xs, ys })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the sample at `idx` (panics if out of bounds).
    #[inline]
    pub fn sample(&self, idx: usize) -> Sample {
        Sample {
            x: self.xs[idx],
            y: self.ys[idx],
        }
    }

    #[inline]
    pub fn xs(&self) -> &[f32] {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &[f32] {
        &self.ys
    }
}

/// Generates a deterministic housing-style dataset: a right-skewed income
/// column and a house-value column that responds linearly to income plus
/// noise, clamped like the real targets.
///
/// A fetch-free stand-in for a real housing table, so runs and tests stay
/// offline and reproducible.
///
/// # Arguments
/// * `n` - Number of samples to generate.
/// * `seed` - RNG seed; equal seeds produce identical datasets.
///
/// # Errors
/// `TrainError::EmptyDataset` if `n` is zero.
pub fn synthetic_housing(n: usize, seed: u64) -> Result<InMemoryDataset> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);

    for _ in 0..n {
        let z: f32 = StandardNormal.sample(&mut rng);
        let income = (INCOME_LOG_MEAN + INCOME_LOG_STD * z).exp();

        let noise: f32 = StandardNormal.sample(&mut rng);
        let value = (VALUE_BASE + VALUE_PER_INCOME * income + VALUE_NOISE_STD * noise)
            .clamp(VALUE_MIN, VALUE_CAP);

        xs.push(income);
        ys.push(value);
    }

    InMemoryDataset::new(xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_basic() {
        let ds = InMemoryDataset::new(vec![1.0, 2.0], vec![3.0, 5.0]).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(!ds.is_empty());
        assert_eq!(ds.sample(0), Sample { x: 1.0, y: 3.0 });
        assert_eq!(ds.sample(1), Sample { x: 2.0, y: 5.0 });
    }

    #[test]
    fn empty_columns_are_rejected() {
        let err = InMemoryDataset::new(vec![], vec![]).unwrap_err();
        assert_eq!(err, TrainError::EmptyDataset);
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let err = InMemoryDataset::new(vec![1.0, 2.0, 3.0], vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            TrainError::ShapeMismatch {
                what: "targets",
                got: 1,
                expected: 3,
            }
        );
    }

    #[test]
    fn synthetic_housing_is_deterministic_per_seed() {
        let a = synthetic_housing(64, 7).unwrap();
        let b = synthetic_housing(64, 7).unwrap();
        assert_eq!(a.xs(), b.xs());
        assert_eq!(a.ys(), b.ys());

        let c = synthetic_housing(64, 8).unwrap();
        assert_ne!(a.xs(), c.xs());
    }

    #[test]
    fn synthetic_housing_stays_in_range() {
        let ds = synthetic_housing(256, 42).unwrap();
        assert_eq!(ds.len(), 256);
        for i in 0..ds.len() {
            let s = ds.sample(i);
            assert!(s.x.is_finite() && s.x > 0.0, "income must be positive, got {}", s.x);
            assert!((VALUE_MIN..=VALUE_CAP).contains(&s.y), "value out of range: {}", s.y);
        }
    }

    #[test]
    fn synthetic_housing_rejects_zero_samples() {
        assert_eq!(synthetic_housing(0, 1).unwrap_err(), TrainError::EmptyDataset);
    }
}
