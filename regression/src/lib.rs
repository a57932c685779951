mod config;
mod dataset;
mod error;
mod loss;
mod normalize;
mod optimizer;
mod trainer;

pub use config::TrainConfig;
pub use dataset::{synthetic_housing, InMemoryDataset, Sample};
pub use error::{Result, TrainError};
pub use loss::mse;
pub use normalize::ZScore;
pub use optimizer::{GradientDescent, Optimizer};
pub use trainer::{design_matrix, EpochSnapshot, FitOutcome, Theta, Trainer};
