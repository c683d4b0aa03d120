use crate::layers::dense::Gradients;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::Optimizer;

/// Adam optimizer. Moment buffers are sized lazily on the first step.
pub struct Adam {
    learning_rate: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    // first and second moments, one (weights, biases) pair per layer
    m: Vec<(Matrix, Matrix)>,
    v: Vec<(Matrix, Matrix)>,
    t: i32,
}

impl Adam {
    pub fn new(learning_rate: f64, beta1: f64, beta2: f64, epsilon: f64) -> Self {
        Adam {
            learning_rate,
            beta1,
            beta2,
            epsilon,
            m: Vec::new(),
            v: Vec::new(),
            t: 0,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn initialize(&mut self, network: &Network) {
        let zeros = || network.layers.iter()
            .map(|l| (
                Matrix::zeros(l.weights.rows, l.weights.cols),
                Matrix::zeros(l.biases.rows, l.biases.cols),
            ))
            .collect::<Vec<_>>();
        self.m = zeros();
        self.v = zeros();
        self.t = 0;
    }

    fn update(&self, param: &mut Matrix, grad: &Matrix, m: &mut Matrix, v: &mut Matrix) {
        let bias1 = 1.0 - self.beta1.powi(self.t);
        let bias2 = 1.0 - self.beta2.powi(self.t);
        let params = param.as_mut_slice();
        let (m, v) = (m.as_mut_slice(), v.as_mut_slice());
        for (i, &g) in grad.as_slice().iter().enumerate() {
            m[i] = self.beta1 * m[i] + (1.0 - self.beta1) * g;
            v[i] = self.beta2 * v[i] + (1.0 - self.beta2) * g * g;
            let m_hat = m[i] / bias1;
            let v_hat = v[i] / bias2;
            params[i] -= self.learning_rate * m_hat / (v_hat.sqrt() + self.epsilon);
        }
    }
}

impl Default for Adam {
    fn default() -> Self {
        Adam::new(0.001, 0.9, 0.999, 1e-8)
    }
}

impl Optimizer for Adam {
    fn step(&mut self, network: &mut Network, grads: &[Gradients]) {
        if self.m.len() != network.layers.len() {
            self.initialize(network);
        }
        self.t += 1;

        let mut m = std::mem::take(&mut self.m);
        let mut v = std::mem::take(&mut self.v);
        for (i, (layer, g)) in network.layers.iter_mut().zip(grads).enumerate() {
            self.update(&mut layer.weights, &g.weights, &mut m[i].0, &mut v[i].0);
            self.update(&mut layer.biases, &g.biases, &mut m[i].1, &mut v[i].1);
        }
        self.m = m;
        self.v = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkSpec;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn first_step_moves_by_learning_rate() {
        let mut net = NetworkSpec { input_size: 1, hidden: vec![], output_size: 1 }
            .build(&mut StdRng::seed_from_u64(0));
        net.layers[0].weights = Matrix::row_vector(&[1.0]);
        let grads = vec![Gradients {
            weights: Matrix::row_vector(&[0.5]),
            biases: Matrix::row_vector(&[-4.0]),
        }];
        let mut adam = Adam::new(0.01, 0.9, 0.999, 1e-8);
        adam.step(&mut net, &grads);
        // After bias correction the first update is lr·sign(g).
        assert!((net.layers[0].weights.get(0, 0) - 0.99).abs() < 1e-6);
        assert!((net.layers[0].biases.get(0, 0) - 0.01).abs() < 1e-6);
    }
}
