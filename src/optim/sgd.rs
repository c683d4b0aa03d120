use crate::layers::dense::Gradients;
use crate::network::network::Network;
use crate::optim::Optimizer;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }
}

impl Optimizer for Sgd {
    /// Plain gradient descent: θ ← θ - lr·∇θ
    fn step(&mut self, network: &mut Network, grads: &[Gradients]) {
        for (layer, g) in network.layers.iter_mut().zip(grads) {
            layer.weights.add_scaled(&g.weights, -self.learning_rate);
            layer.biases.add_scaled(&g.biases, -self.learning_rate);
        }
    }
}
