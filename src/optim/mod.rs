pub mod sgd;
pub mod adam;

use serde::{Serialize, Deserialize};

use crate::layers::dense::Gradients;
use crate::network::network::Network;
pub use sgd::Sgd;
pub use adam::Adam;

/// Applies one parameter update from per-layer gradients.
pub trait Optimizer {
    fn step(&mut self, network: &mut Network, grads: &[Gradients]);
}

/// Serializable optimizer choice for experiment configs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OptimizerConfig {
    Sgd { learning_rate: f64 },
    Adam { learning_rate: f64, beta1: f64, beta2: f64, epsilon: f64 },
}

impl OptimizerConfig {
    pub fn build(&self) -> Box<dyn Optimizer> {
        match *self {
            OptimizerConfig::Sgd { learning_rate } => Box::new(Sgd::new(learning_rate)),
            OptimizerConfig::Adam { learning_rate, beta1, beta2, epsilon } => {
                Box::new(Adam::new(learning_rate, beta1, beta2, epsilon))
            }
        }
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig::Adam { learning_rate: 0.001, beta1: 0.9, beta2: 0.999, epsilon: 1e-8 }
    }
}
