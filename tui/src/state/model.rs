use std::time::{Duration, Instant};

use regression::{EpochSnapshot, Theta};

/// Events emitted by the training thread as the fit progresses.
#[derive(Debug, Clone)]
pub enum TrainingEvent {
    Epoch(EpochSnapshot),
    Complete(Theta),
    Failed(String),
}

/// High-level lifecycle states for a training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Training,
    Finished,
    Error,
}

/// A single log entry shown in the event panel.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
}

/// Full snapshot rendered by the TUI.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub phase: SessionPhase,
    pub started_at: Instant,
    pub elapsed: Duration,
    pub epochs_total: usize,
    pub learning_rate: f32,
    /// Normalized (income, value) samples; fixed for the whole session.
    pub samples: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// One cost per completed epoch, in epoch order.
    pub costs: Vec<f32>,
    /// Line parameters after the latest completed epoch.
    pub theta: Theta,
    pub final_theta: Option<Theta>,
    pub logs: Vec<LogLine>,
}
