use log::info;

use regression::{synthetic_housing, GradientDescent, Result, TrainConfig, Trainer, ZScore};

const SAMPLES: usize = 512;
const SEED: u64 = 17;

fn main() -> Result<()> {
    env_logger::init();

    let cfg = TrainConfig::default();
    let data = synthetic_housing(SAMPLES, SEED)?;

    let xs = ZScore::fit(data.xs())?.transform(data.xs());
    let ys = ZScore::fit(data.ys())?.transform(data.ys());
    info!(
        "training on {} samples (lr {}, {} epochs)",
        data.len(),
        cfg.learning_rate,
        cfg.epochs
    );

    let mut trainer = Trainer::new(GradientDescent::new(cfg.learning_rate), cfg.epochs);
    let outcome = trainer.fit_columns(&xs, &ys, |snap| {
        info!(
            "epoch {:>2}/{}: cost {:.6}, y = {:.4} + {:.4}x",
            snap.epoch + 1,
            cfg.epochs,
            snap.cost,
            snap.theta.intercept,
            snap.theta.slope
        );
    })?;

    println!(
        "Final parameters: Intercept = {:.4}, Slope = {:.4}",
        outcome.theta.intercept, outcome.theta.slope
    );

    Ok(())
}
