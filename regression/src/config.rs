/// Fixed hyperparameters for a training run.
///
/// The defaults are the demo's: learning rate 0.1 and 50 epochs, tuned for
/// standardized columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    /// Step size for each gradient update.
    ///
    /// Accepted as-is: non-positive or excessively large values raise no
    /// error, but convergence is then not guaranteed and the cost may grow
    /// without bound.
    pub learning_rate: f32,

    /// Number of full passes over the training set. Always runs exactly this
    /// many, with no early exit; zero is legal and leaves the parameters at
    /// their initial value.
    pub epochs: usize,
}

impl TrainConfig {
    /// Creates a new `TrainConfig`.
    ///
    /// # Arguments
    /// * `learning_rate` - Step size for each gradient update.
    /// * `epochs` - Number of epochs to run.
    pub fn new(learning_rate: f32, epochs: usize) -> Self {
        Self {
            learning_rate,
            epochs,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            epochs: 50,
        }
    }
}
