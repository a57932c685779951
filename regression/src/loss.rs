use ndarray::ArrayView1;

/// Mean squared error between predictions and targets.
///
/// Returns 0.0 for empty input; callers that need N > 0 guard it themselves.
pub fn mse(y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
    (&y_pred - &y)
        .mapv(|e| e.powi(2))
        .mean()
        .unwrap_or_default()
}
