use crate::error::{Result, TrainError};

/// Z-score standardization fitted on a single column.
///
/// Uses population statistics (divide by N): the column is centered and
/// scaled against the whole dataset with no train/validation split. That is
/// an intentional methodological simplification of this pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScore {
    mean: f32,
    std: f32,
}

impl ZScore {
    /// Fits the standardizer to a column.
    ///
    /// # Arguments
    /// * `values` - The raw column.
    ///
    /// # Returns
    /// A `ZScore` holding the column's mean and population standard
    /// deviation.
    ///
    /// # Errors
    /// - `TrainError::EmptyDataset` if `values` is empty.
    /// - `TrainError::ConstantFeature` if the column has zero variance.
    pub fn fit(values: &[f32]) -> Result<Self> {
        if values.is_empty() {
            return Err(TrainError::EmptyDataset);
        }

        let n = values.len() as f32;
        let mean = values.iter().sum::<f32>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
        let std = variance.sqrt();

        if std == 0.0 {
            return Err(TrainError::ConstantFeature);
        }

        Ok(Self { mean, std })
    }

    /// Applies `(v - mean) / std` to every entry of `values`.
    pub fn transform(&self, values: &[f32]) -> Vec<f32> {
        values.iter().map(|v| (v - self.mean) / self.std).collect()
    }

    #[inline]
    pub fn mean(&self) -> f32 {
        self.mean
    }

    #[inline]
    pub fn std(&self) -> f32 {
        self.std
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_uses_population_statistics() {
        // Population std of this column is exactly 2 (variance 4); the
        // sample estimator would give a different value.
        let column = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let z = ZScore::fit(&column).unwrap();
        assert_eq!(z.mean(), 5.0);
        assert_eq!(z.std(), 2.0);
    }

    #[test]
    fn transform_centers_and_scales() {
        let column = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let z = ZScore::fit(&column).unwrap();
        let scaled = z.transform(&column);

        let n = scaled.len() as f32;
        let mean = scaled.iter().sum::<f32>() / n;
        let var = scaled.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
        assert!(mean.abs() < 1e-6, "mean after transform: {mean}");
        assert!((var - 1.0).abs() < 1e-5, "variance after transform: {var}");
    }

    #[test]
    fn constant_column_is_rejected() {
        let err = ZScore::fit(&[3.0, 3.0, 3.0]).unwrap_err();
        assert_eq!(err, TrainError::ConstantFeature);
    }

    #[test]
    fn empty_column_is_rejected() {
        let err = ZScore::fit(&[]).unwrap_err();
        assert_eq!(err, TrainError::EmptyDataset);
    }
}
