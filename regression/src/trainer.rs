use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{Result, TrainError};
use crate::loss;
use crate::optimizer::Optimizer;

/// Parameters of the fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theta {
    pub intercept: f32,
    pub slope: f32,
}

impl Theta {
    /// Evaluates the line at `x`.
    #[inline]
    pub fn predict(&self, x: f32) -> f32 {
        self.intercept + self.slope * x
    }
}

/// Where training stands after one completed epoch.
///
/// `epoch` is the zero-based index of the epoch that just finished; `theta`
/// reflects the step taken during it, `cost` the residuals that produced
/// that step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochSnapshot {
    pub epoch: usize,
    pub theta: Theta,
    pub cost: f32,
}

/// Final result of a fit: the parameters plus the full per-epoch cost curve.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub theta: Theta,
    pub cost_history: Vec<f32>,
}

/// Builds the N x 2 design matrix for a single feature column: every row is
/// `[1.0, x_i]`, the leading ones column carrying the intercept.
pub fn design_matrix(xs: &[f32]) -> Array2<f32> {
    Array2::from_shape_fn((xs.len(), 2), |(i, j)| if j == 0 { 1.0 } else { xs[i] })
}

/// Fits a two-parameter line by full-batch gradient descent for a fixed
/// number of epochs.
pub struct Trainer<O: Optimizer> {
    optimizer: O,
    epochs: usize,
}

impl<O: Optimizer> Trainer<O> {
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `optimizer` - The parameter-update rule applied once per epoch.
    /// * `epochs` - The exact number of epochs `fit` will run. Zero is legal
    ///   and leaves the parameters at their (0, 0) initialization.
    pub fn new(optimizer: O, epochs: usize) -> Self {
        Self { optimizer, epochs }
    }

    /// Performs `epochs` epochs of training over the whole dataset.
    ///
    /// Each epoch predicts over every sample, derives the gradient from the
    /// residuals, lets the optimizer step both parameters at once, and
    /// records the epoch's cost. The cost is the mean squared error of the
    /// residuals that produced the step, measured before the step was taken.
    /// The loop always runs to `epochs`: there is no convergence check, and
    /// an oversized learning rate is allowed to grow the cost unchecked.
    ///
    /// # Arguments
    /// * `x_b` - The N x 2 design matrix (`design_matrix` builds it).
    /// * `y` - The N targets.
    /// * `on_epoch` - Observer invoked once per completed epoch with the
    ///   post-step parameters and the epoch cost. Rendering, logging and
    ///   pacing live behind this seam; the loop itself performs no I/O.
    ///
    /// # Returns
    /// The final parameters and the cost history, one entry per epoch.
    ///
    /// # Errors
    /// - `TrainError::EmptyDataset` if N is zero (the gradient would divide
    ///   by zero).
    /// - `TrainError::ShapeMismatch` if `y` does not have N entries or `x_b`
    ///   does not have exactly 2 columns.
    pub fn fit(
        &mut self,
        x_b: ArrayView2<f32>,
        y: ArrayView1<f32>,
        mut on_epoch: impl FnMut(EpochSnapshot),
    ) -> Result<FitOutcome> {
        let n = x_b.nrows();
        if n == 0 {
            return Err(TrainError::EmptyDataset);
        }
        if y.len() != n {
            return Err(TrainError::ShapeMismatch {
                what: "targets",
                got: y.len(),
                expected: n,
            });
        }
        if x_b.ncols() != 2 {
            return Err(TrainError::ShapeMismatch {
                what: "design matrix columns",
                got: x_b.ncols(),
                expected: 2,
            });
        }

        let mut theta = Array1::<f32>::zeros(2);
        let mut cost_history = Vec::with_capacity(self.epochs);

        for epoch in 0..self.epochs {
            let y_pred = x_b.dot(&theta);
            let errors = &y_pred - &y;
            let grad = x_b.t().dot(&errors) / n as f32;

            self.optimizer.update_params(&mut theta, grad.view());

            let cost = loss::mse(y_pred.view(), y.view());
            cost_history.push(cost);

            on_epoch(EpochSnapshot {
                epoch,
                theta: theta_from(&theta),
                cost,
            });
        }

        Ok(FitOutcome {
            theta: theta_from(&theta),
            cost_history,
        })
    }

    /// Convenience over `fit` for callers holding plain columns: builds the
    /// design matrix and target vector internally.
    ///
    /// # Errors
    /// Same as `fit`.
    pub fn fit_columns(
        &mut self,
        xs: &[f32],
        ys: &[f32],
        on_epoch: impl FnMut(EpochSnapshot),
    ) -> Result<FitOutcome> {
        let x_b = design_matrix(xs);
        let y = Array1::from_vec(ys.to_vec());
        self.fit(x_b.view(), y.view(), on_epoch)
    }
}

fn theta_from(params: &Array1<f32>) -> Theta {
    Theta {
        intercept: params[0],
        slope: params[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrainConfig;
    use crate::optimizer::GradientDescent;

    fn trainer(learning_rate: f32, epochs: usize) -> Trainer<GradientDescent> {
        Trainer::new(GradientDescent::new(learning_rate), epochs)
    }

    #[test]
    fn design_matrix_prepends_ones_column() {
        let x_b = design_matrix(&[3.0, -2.0, 0.5]);
        assert_eq!(x_b.nrows(), 3);
        assert_eq!(x_b.ncols(), 2);
        assert_eq!(x_b.row(0).to_vec(), vec![1.0, 3.0]);
        assert_eq!(x_b.row(1).to_vec(), vec![1.0, -2.0]);
        assert_eq!(x_b.row(2).to_vec(), vec![1.0, 0.5]);
    }

    #[test]
    fn zero_gradient_keeps_theta_at_origin() {
        // Symmetric targets: at theta (0, 0) both gradient components cancel
        // exactly, so theta never moves and every epoch costs mean(y^2) = 1.
        let xs = [-1.0, -1.0, 1.0, 1.0];
        let ys = [-1.0, 1.0, -1.0, 1.0];

        let outcome = trainer(0.1, 3).fit_columns(&xs, &ys, |_| {}).unwrap();

        assert_eq!(outcome.theta, Theta { intercept: 0.0, slope: 0.0 });
        assert_eq!(outcome.cost_history, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn one_epoch_step_is_exact_on_identity_targets() {
        // y = x: at theta (0, 0) the gradient is (0, -1), so one epoch at
        // lr 0.1 moves theta to (0, 0.1). All values here are exact in f32.
        let xs = [-1.0, -1.0, 1.0, 1.0];
        let ys = [-1.0, -1.0, 1.0, 1.0];

        let outcome = trainer(0.1, 1).fit_columns(&xs, &ys, |_| {}).unwrap();

        assert_eq!(outcome.theta, Theta { intercept: 0.0, slope: 0.1 });
        assert_eq!(outcome.cost_history, vec![1.0]);
    }

    #[test]
    fn cost_decreases_on_learnable_targets() {
        let xs = [-1.0, -1.0, 1.0, 1.0];
        let ys = [-1.0, -1.0, 1.0, 1.0];

        let outcome = trainer(0.1, 50).fit_columns(&xs, &ys, |_| {}).unwrap();

        for pair in outcome.cost_history.windows(2) {
            assert!(pair[1] < pair[0], "cost went {} -> {}", pair[0], pair[1]);
        }
        assert!(outcome.theta.slope > 0.9, "slope: {}", outcome.theta.slope);
        assert!(outcome.theta.intercept.abs() < 1e-3);
    }

    #[test]
    fn history_has_one_entry_per_epoch() {
        let cfg = TrainConfig::default();
        let outcome = trainer(cfg.learning_rate, cfg.epochs)
            .fit_columns(&[0.0, 1.0, 2.0], &[0.5, 1.0, 1.5], |_| {})
            .unwrap();

        assert_eq!(outcome.cost_history.len(), cfg.epochs);
        assert!(outcome.cost_history.iter().all(|c| *c >= 0.0));
    }

    #[test]
    fn zero_epochs_returns_initial_theta_and_empty_history() {
        let mut calls = 0;
        let outcome = trainer(0.1, 0)
            .fit_columns(&[1.0, 2.0], &[1.0, 2.0], |_| calls += 1)
            .unwrap();

        assert_eq!(outcome.theta, Theta { intercept: 0.0, slope: 0.0 });
        assert!(outcome.cost_history.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn empty_dataset_is_rejected_before_the_loop() {
        let err = trainer(0.1, 5).fit_columns(&[], &[], |_| {}).unwrap_err();
        assert_eq!(err, TrainError::EmptyDataset);
    }

    #[test]
    fn mismatched_targets_are_rejected() {
        let err = trainer(0.1, 5)
            .fit_columns(&[1.0, 2.0, 3.0], &[1.0, 2.0], |_| {})
            .unwrap_err();
        assert_eq!(
            err,
            TrainError::ShapeMismatch { what: "targets", got: 2, expected: 3 }
        );
    }

    #[test]
    fn wrong_design_matrix_width_is_rejected() {
        let x_b = Array2::<f32>::zeros((4, 3));
        let y = Array1::<f32>::zeros(4);

        let err = trainer(0.1, 5).fit(x_b.view(), y.view(), |_| {}).unwrap_err();
        assert_eq!(
            err,
            TrainError::ShapeMismatch { what: "design matrix columns", got: 3, expected: 2 }
        );
    }

    #[test]
    fn observer_sees_every_epoch_in_order() {
        let xs = [-1.0, 0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 2.0, 3.0];

        let mut snaps = Vec::new();
        let outcome = trainer(0.05, 8)
            .fit_columns(&xs, &ys, |snap| snaps.push(snap))
            .unwrap();

        assert_eq!(snaps.len(), 8);
        for (i, snap) in snaps.iter().enumerate() {
            assert_eq!(snap.epoch, i);
            assert_eq!(snap.cost, outcome.cost_history[i]);
        }
        assert_eq!(snaps.last().unwrap().theta, outcome.theta);
    }

    #[test]
    fn identical_inputs_give_bit_identical_runs() {
        let xs = [0.25, -1.5, 3.0, 0.75, -0.5];
        let ys = [1.0, -2.0, 5.5, 2.25, 0.0];

        let a = trainer(0.1, 40).fit_columns(&xs, &ys, |_| {}).unwrap();
        let b = trainer(0.1, 40).fit_columns(&xs, &ys, |_| {}).unwrap();

        assert_eq!(a, b);
    }
}
