use std::fmt;

/// The result type used across the regression crate.
pub type Result<T> = std::result::Result<T, TrainError>;

/// Errors produced when training inputs are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainError {
    /// The dataset contains no samples; gradient and cost averaging would
    /// divide by zero.
    EmptyDataset,

    /// Two aligned inputs disagree in shape (e.g. targets vs. matrix rows).
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "targets").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// A feature column has zero variance and cannot be standardized.
    ConstantFeature,
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainError::EmptyDataset => {
                write!(f, "empty dataset: averaging over zero samples divides by zero")
            }
            TrainError::ShapeMismatch { what, got, expected } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            TrainError::ConstantFeature => {
                write!(f, "feature column has zero variance and cannot be standardized")
            }
        }
    }
}

impl std::error::Error for TrainError {}
