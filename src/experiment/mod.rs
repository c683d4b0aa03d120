pub mod config;
pub mod runner;

pub use config::ExperimentConfig;
pub use runner::{run_experiment, summary_table, LossReport};
