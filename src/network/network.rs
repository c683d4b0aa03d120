use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{activation::activation::ActivationFunction, layers::dense::{Dense, Gradients}};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Dense>,
}

impl Network {
    /// Builds a network from (input_size, size, activation) tuples.
    pub fn new<R: Rng + ?Sized>(layer_specs: &[(usize, usize, ActivationFunction)], rng: &mut R) -> Network {
        let layers = layer_specs.iter()
            .map(|&(input_size, size, activation)| Dense::new(input_size, size, activation, rng))
            .collect();
        Network { layers }
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, Dense::input_size)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Dense::size)
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.forward(&current);
        }
        current
    }

    /// Backpropagates ∂L/∂output for the last forwarded sample and returns
    /// one `Gradients` per layer, input layer first.
    pub fn backward(&self, output_delta: &[f64]) -> Vec<Gradients> {
        let mut grads = Vec::with_capacity(self.layers.len());
        let mut delta = output_delta.to_vec();
        for layer in self.layers.iter().rev() {
            let (g, below) = layer.backward(&delta);
            grads.push(g);
            delta = below;
        }
        grads.reverse();
        grads
    }

    /// First output of every sample; the regression head has one unit.
    pub fn predict(&mut self, inputs: &[Vec<f64>]) -> Vec<f64> {
        inputs.iter()
            .map(|x| self.forward(x).first().copied().unwrap_or(f64::NAN))
            .collect()
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
