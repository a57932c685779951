use std::time::Instant;

use tokio::sync::mpsc;

use regression::{Theta, TrainConfig};

use super::model::{LogLine, SessionPhase, SessionView, TrainingEvent};

const MAX_LOGS: usize = 200;
const BOUNDS_PAD: f64 = 0.5;

/// Drives the TUI state from a stream of [`TrainingEvent`]s.
pub struct SessionState {
    view: SessionView,
    events: mpsc::UnboundedReceiver<TrainingEvent>,
}

impl SessionState {
    /// Creates a new `SessionState`.
    ///
    /// # Arguments
    /// * `cfg` - Hyperparameters of the run, shown in the header.
    /// * `samples` - Normalized (income, value) pairs for the scatter plot.
    /// * `events` - The receiver end of the training events channel.
    pub fn new(
        cfg: TrainConfig,
        samples: Vec<(f64, f64)>,
        events: mpsc::UnboundedReceiver<TrainingEvent>,
    ) -> Self {
        let x_bounds = padded_bounds(samples.iter().map(|(x, _)| *x));
        let y_bounds = padded_bounds(samples.iter().map(|(_, y)| *y));

        let view = SessionView {
            phase: SessionPhase::Training,
            started_at: Instant::now(),
            elapsed: Default::default(),
            epochs_total: cfg.epochs,
            learning_rate: cfg.learning_rate,
            samples,
            x_bounds,
            y_bounds,
            costs: Vec::with_capacity(cfg.epochs),
            theta: Theta { intercept: 0.0, slope: 0.0 },
            final_theta: None,
            logs: vec![LogLine {
                level: "INFO",
                message: format!(
                    "descending for {} epochs at lr {}...",
                    cfg.epochs, cfg.learning_rate
                ),
            }],
        };

        Self { view, events }
    }

    /// Returns the current snapshot for rendering.
    pub fn view(&self) -> SessionView {
        self.view.clone()
    }

    /// Drains all pending events and updates state. Non-blocking.
    ///
    /// Should be called once per TUI frame tick.
    pub fn tick(&mut self) {
        self.view.elapsed = self.view.started_at.elapsed();

        // Drain all events that are ready right now without blocking.
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: TrainingEvent) {
        match event {
            TrainingEvent::Epoch(snap) => {
                self.view.theta = snap.theta;
                self.view.costs.push(snap.cost);
                self.push_log(
                    "INFO",
                    format!(
                        "epoch {}/{}: cost={:.4}",
                        snap.epoch + 1,
                        self.view.epochs_total,
                        snap.cost
                    ),
                );
            }

            TrainingEvent::Complete(theta) => {
                self.view.phase = SessionPhase::Finished;
                self.view.theta = theta;
                self.view.final_theta = Some(theta);
                self.push_log(
                    "INFO",
                    format!(
                        "training complete: y = {:.4} + {:.4}x",
                        theta.intercept, theta.slope
                    ),
                );
            }

            TrainingEvent::Failed(msg) => {
                self.view.phase = SessionPhase::Error;
                self.push_log("ERROR", msg);
            }
        }
    }

    fn push_log(&mut self, level: &'static str, message: String) {
        self.view.logs.push(LogLine { level, message });
        if self.view.logs.len() > MAX_LOGS {
            let drain = self.view.logs.len() - MAX_LOGS;
            self.view.logs.drain(0..drain);
        }
    }
}

fn padded_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo > hi {
        return [-1.0, 1.0];
    }
    [lo - BOUNDS_PAD, hi + BOUNDS_PAD]
}
