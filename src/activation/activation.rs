use serde::{Serialize, Deserialize};

/// Element-wise activations used by the regression topology: ReLU in the
/// hidden layers, identity on the unconstrained output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Relu,
    Identity,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Relu => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Identity => x,
        }
    }

    /// Derivative at the pre-activation `x`. ReLU uses 0 at the kink.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Relu => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Identity => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relu_and_identity() {
        let relu = ActivationFunction::Relu;
        assert_eq!(relu.function(-2.0), 0.0);
        assert_eq!(relu.function(3.0), 3.0);
        assert_eq!(relu.derivative(0.0), 0.0);
        assert_eq!(ActivationFunction::Identity.function(-2.0), -2.0);
        assert_eq!(ActivationFunction::Identity.derivative(-2.0), 1.0);
    }
}
