use ndarray::{Array1, ArrayView1};

/// Parameter-update rule applied once per epoch from a full-batch gradient.
pub trait Optimizer {
    fn update_params(&mut self, params: &mut Array1<f32>, grad: ArrayView1<f32>);
}

/// Batch gradient descent with a fixed learning rate.
#[derive(Debug)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GradientDescent {
    /// Makes a step in the opposite direction of the gradient:
    /// `params -= learning_rate * grad`, every component moving at once from
    /// the same gradient.
    fn update_params(&mut self, params: &mut Array1<f32>, grad: ArrayView1<f32>) {
        params.scaled_add(-self.learning_rate, &grad);
    }
}
