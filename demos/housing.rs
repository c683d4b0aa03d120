//! Compares the four losses on synthetic wide-range housing prices and
//! shows why the log losses need positive predictions to learn.
//!
//!   cargo run --example housing

use logloss_nn::data::synthetic_housing;
use logloss_nn::experiment::summary_table;
use logloss_nn::loss::{mean_log_absolute_error, mean_squared_logarithmic_error};
use logloss_nn::{logging, run_experiment, ExperimentConfig, LossContext};

fn main() -> logloss_nn::Result<()> {
    logging::init();

    let ctx = LossContext::default();
    let (y_true, y_pred) = ([0.02], [-5.0]);
    println!(
        "negative prediction: msle = {:.6}, mlae = {:.4}",
        mean_squared_logarithmic_error(&y_true, &y_pred, &ctx)?,
        mean_log_absolute_error(&y_true, &y_pred, &ctx)?,
    );

    let data = synthetic_housing(800, 7);
    let config = ExperimentConfig { epochs: 60, ..Default::default() };
    let reports = run_experiment(&data, &config)?;
    print!("{}", summary_table(&reports));
    Ok(())
}
