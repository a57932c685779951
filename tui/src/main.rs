use std::thread;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use regression::{synthetic_housing, GradientDescent, TrainConfig, Trainer, ZScore};

mod app;
mod state;
mod ui;

use state::model::TrainingEvent;
use state::session::SessionState;

const SAMPLES: usize = 512;
const SEED: u64 = 17;

/// Delay between epochs so the descent is watchable; pacing belongs to this
/// binary's observer, never to the training loop itself.
const EPOCH_PACE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let cfg = TrainConfig::default();
    let data = synthetic_housing(SAMPLES, SEED)?;

    let xs = ZScore::fit(data.xs())?.transform(data.xs());
    let ys = ZScore::fit(data.ys())?.transform(data.ys());

    let samples: Vec<(f64, f64)> = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| (*x as f64, *y as f64))
        .collect();

    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn(move || {
        let mut trainer = Trainer::new(GradientDescent::new(cfg.learning_rate), cfg.epochs);
        let result = trainer.fit_columns(&xs, &ys, |snap| {
            let _ = tx.send(TrainingEvent::Epoch(snap));
            thread::sleep(EPOCH_PACE);
        });

        let _ = match result {
            Ok(outcome) => tx.send(TrainingEvent::Complete(outcome.theta)),
            Err(e) => tx.send(TrainingEvent::Failed(e.to_string())),
        };
    });

    let state = SessionState::new(cfg, samples, rx);
    let final_view = app::run::run(state)?;

    if let Some(theta) = final_view.final_theta {
        println!(
            "Final parameters: Intercept = {:.4}, Slope = {:.4}",
            theta.intercept, theta.slope
        );
    }

    Ok(())
}
