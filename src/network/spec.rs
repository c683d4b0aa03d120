use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::network::network::Network;

/// Fixed feed-forward topology: ReLU hidden layers followed by a linear
/// output layer.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of the
/// trained weights, so an experiment can describe its architecture before
/// training starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_size: usize,
    /// Widths of the hidden layers, input side first.
    pub hidden: Vec<usize>,
    #[serde(default = "default_output_size")]
    pub output_size: usize,
}

fn default_output_size() -> usize {
    1
}

impl NetworkSpec {
    /// Two ReLU hidden layers and a single linear output unit.
    pub fn regression(input_size: usize, hidden1: usize, hidden2: usize) -> NetworkSpec {
        NetworkSpec { input_size, hidden: vec![hidden1, hidden2], output_size: 1 }
    }

    /// (input_size, size, activation) for every layer.
    pub fn layer_specs(&self) -> Vec<(usize, usize, ActivationFunction)> {
        let mut specs = Vec::with_capacity(self.hidden.len() + 1);
        let mut fan_in = self.input_size;
        for &width in &self.hidden {
            specs.push((fan_in, width, ActivationFunction::Relu));
            fan_in = width;
        }
        specs.push((fan_in, self.output_size, ActivationFunction::Identity));
        specs
    }

    /// Instantiates freshly initialised weights.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Network {
        Network::new(&self.layer_specs(), rng)
    }
}
