use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

/// Weight and bias gradients for one layer.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub weights: Matrix,
    pub biases: Matrix,
}

impl Gradients {
    pub fn zeros_like(layer: &Dense) -> Gradients {
        Gradients {
            weights: Matrix::zeros(layer.weights.rows, layer.weights.cols),
            biases: Matrix::zeros(layer.biases.rows, layer.biases.cols),
        }
    }

    /// `self += other · factor`
    pub fn accumulate(&mut self, other: &Gradients, factor: f64) {
        self.weights.add_scaled(&other.weights, factor);
        self.biases.add_scaled(&other.biases, factor);
    }
}

/// Fully connected layer: a = σ(x·W + b).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dense {
    /// Shape `input_size × size`.
    pub weights: Matrix,
    /// Shape `1 × size`.
    pub biases: Matrix,
    pub activation: ActivationFunction,
    #[serde(skip)]
    input: Matrix,
    // pre-activation z, needed for σ'(z) in backward
    #[serde(skip)]
    pre_activation: Matrix,
}

impl Dense {
    /// He-initialised weights before ReLU, Xavier otherwise. Biases start at 0.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Dense {
        let weights = match activation {
            ActivationFunction::Relu => Matrix::he(input_size, size, rng),
            ActivationFunction::Identity => Matrix::xavier(input_size, size, rng),
        };
        Dense {
            weights,
            biases: Matrix::zeros(1, size),
            activation,
            input: Matrix::default(),
            pre_activation: Matrix::default(),
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    pub fn size(&self) -> usize {
        self.weights.cols
    }

    /// Forward pass for one sample; caches what `backward` needs.
    pub fn forward(&mut self, input: &[f64]) -> Vec<f64> {
        let x = Matrix::row_vector(input);
        let z = &x.matmul(&self.weights) + &self.biases;
        let a = z.map(|v| self.activation.function(v));
        self.input = x;
        self.pre_activation = z;
        a.row(0).to_vec()
    }

    /// Backward pass for the sample last seen by `forward`.
    ///
    /// `delta` is ∂L/∂a for this layer's output. Returns the parameter
    /// gradients and ∂L/∂x for the layer below.
    pub fn backward(&self, delta: &[f64]) -> (Gradients, Vec<f64>) {
        let act_derivative = self.pre_activation.map(|z| self.activation.derivative(z));
        // δ = ∂L/∂a ⊙ σ'(z)
        let layer_delta = Matrix::row_vector(delta).hadamard(&act_derivative);

        let weights = self.input.transpose().matmul(&layer_delta);
        let delta_input = layer_delta.matmul(&self.weights.transpose());

        (
            Gradients { weights, biases: layer_delta },
            delta_input.row(0).to_vec(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn fixed_layer(activation: ActivationFunction) -> Dense {
        let mut layer = Dense::new(2, 2, activation, &mut StdRng::seed_from_u64(1));
        layer.weights = Matrix::from_rows(&[vec![1.0, -1.0], vec![2.0, 0.5]]);
        layer.biases = Matrix::row_vector(&[0.0, -3.0]);
        layer
    }

    #[test]
    fn forward_applies_weights_bias_and_activation() {
        let mut layer = fixed_layer(ActivationFunction::Relu);
        // z = [1 + 4, -1 + 1 - 3] = [5, -3]
        assert_eq!(layer.forward(&[1.0, 2.0]), vec![5.0, 0.0]);
    }

    #[test]
    fn backward_masks_inactive_units() {
        let mut layer = fixed_layer(ActivationFunction::Relu);
        layer.forward(&[1.0, 2.0]);
        let (grads, delta_in) = layer.backward(&[1.0, 1.0]);
        assert_eq!(grads.biases.as_slice(), &[1.0, 0.0]);
        assert_eq!(grads.weights.as_slice(), &[1.0, 0.0, 2.0, 0.0]);
        assert_eq!(delta_in, vec![1.0, 2.0]);
    }

    #[test]
    fn serde_skips_forward_cache() {
        let mut layer = fixed_layer(ActivationFunction::Identity);
        layer.forward(&[1.0, 1.0]);
        let json = serde_json::to_string(&layer).unwrap();
        assert!(!json.contains("pre_activation"));
        let back: Dense = serde_json::from_str(&json).unwrap();
        assert_eq!(back.weights, layer.weights);
    }
}
