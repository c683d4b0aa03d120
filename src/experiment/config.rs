use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::loss::{context::DEFAULT_EPSILON, LossType};
use crate::metric::MetricType;
use crate::optim::OptimizerConfig;
use crate::train::NonFinitePolicy;

/// Everything needed to reproduce one loss comparison run.
///
/// Every field has a default, so a config file only lists what it changes.
/// `label_divisor` doubles as the scale of the log-absolute losses so that
/// they see labels in natural units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Widths of the two ReLU hidden layers.
    pub hidden: [usize; 2],
    pub label_divisor: f64,
    pub epsilon: f64,
    /// Losses to compare; one fresh network is trained per entry.
    pub losses: Vec<LossType>,
    pub metric: MetricType,
    pub epochs: usize,
    pub batch_size: usize,
    pub validation_split: f64,
    pub optimizer: OptimizerConfig,
    pub non_finite: NonFinitePolicy,
    pub seed: u64,
    /// Header name of the target column in CSV input; last column if unset.
    pub target_column: Option<String>,
    /// Where to write each trained network as `<loss>.json`.
    pub model_dir: Option<String>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            hidden: [64, 64],
            label_divisor: 1000.0,
            epsilon: DEFAULT_EPSILON,
            losses: LossType::ALL.to_vec(),
            metric: MetricType::Mae,
            epochs: 100,
            batch_size: 32,
            validation_split: 0.2,
            optimizer: OptimizerConfig::default(),
            non_finite: NonFinitePolicy::Abort,
            seed: 42,
            target_column: None,
            model_dir: None,
        }
    }
}

impl ExperimentConfig {
    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load_json(path: &str) -> Result<ExperimentConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: ExperimentConfig = serde_json::from_str(
            r#"{"losses":["mlae","mse"],"epochs":5,"optimizer":{"type":"sgd","learning_rate":0.05}}"#,
        ).unwrap();
        assert_eq!(cfg.losses, vec![LossType::Mlae, LossType::Mse]);
        assert_eq!(cfg.epochs, 5);
        assert_eq!(cfg.optimizer, OptimizerConfig::Sgd { learning_rate: 0.05 });
        assert_eq!(cfg.label_divisor, 1000.0);
        assert_eq!(cfg.hidden, [64, 64]);
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join("logloss_nn_experiment_config.json");
        let path = path.to_str().unwrap();
        let cfg = ExperimentConfig { epochs: 7, non_finite: NonFinitePolicy::SkipBatch, ..Default::default() };
        cfg.save_json(path).unwrap();
        let back = ExperimentConfig::load_json(path).unwrap();
        std::fs::remove_file(path).ok();
        assert_eq!(back, cfg);
    }
}
