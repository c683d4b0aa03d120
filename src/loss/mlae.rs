use crate::loss::context::DEFAULT_SCALE;
use crate::loss::log_abs::{log1p_relu, log1p_relu_derivative, validate_scale, sign};
use crate::loss::{check_shapes, Loss, LossError};

/// Mean log absolute error: mean(|ln(relu(t·s)+1) - ln(relu(p·s)+1)|).
///
/// `scale` converts normalised labels back to their natural unit range so
/// the `+1` stabiliser is negligible relative to typical values.
pub struct MlaeLoss {
    scale: f64,
}

impl MlaeLoss {
    /// Fails unless `scale` is finite and strictly positive; a negative
    /// scale would flip which side the relu rectifies.
    pub fn new(scale: f64) -> Result<Self, LossError> {
        validate_scale(scale)?;
        Ok(MlaeLoss { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for MlaeLoss {
    fn default() -> Self {
        MlaeLoss { scale: DEFAULT_SCALE }
    }
}

impl Loss for MlaeLoss {
    fn name(&self) -> &'static str {
        "mean_log_absolute_error"
    }

    fn loss(&self, y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
        let n = check_shapes(y_true, y_pred)? as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(&t, &p)| (log1p_relu(t, self.scale) - log1p_relu(p, self.scale)).abs())
            .sum::<f64>() / n)
    }

    /// Per-output subgradient: -sign(a - b) · b'(p) / n
    fn gradient(&self, y_true: &[f64], y_pred: &[f64]) -> Result<Vec<f64>, LossError> {
        let n = check_shapes(y_true, y_pred)? as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(&t, &p)| {
                let diff = log1p_relu(t, self.scale) - log1p_relu(p, self.scale);
                -sign(diff) * log1p_relu_derivative(p, self.scale) / n
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_negative_prediction_is_rectified_to_zero() {
        let loss = MlaeLoss::new(1000.0).unwrap().loss(&[0.02], &[-5.0]).unwrap();
        assert!(loss.is_finite());
        assert!((loss - 21.0_f64.ln()).abs() < 1e-12);
        assert!((loss - 3.0445).abs() < 1e-4);
    }

    #[test]
    fn rejects_non_positive_or_non_finite_scale() {
        for bad in [0.0, -1000.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(MlaeLoss::new(bad), Err(LossError::InvalidScale(_))), "{bad}");
        }
        assert_eq!(MlaeLoss::new(0.5).unwrap().scale(), 0.5);
    }

    #[test]
    fn zero_on_identical_inputs() {
        let loss = MlaeLoss::default().loss(&[1.0, 2.0], &[1.0, 2.0]).unwrap();
        assert_eq!(loss, 0.0);
    }

    #[test]
    fn negative_values_are_exactly_zero_after_relu() {
        // Both sides rectify to ln(1) = 0 exactly.
        let loss = MlaeLoss::default().loss(&[-1.0], &[-7.5]).unwrap();
        assert_eq!(loss, 0.0);
    }

    #[test]
    fn rectified_prediction_has_no_gradient() {
        let g = MlaeLoss::default().gradient(&[0.02], &[-5.0]).unwrap();
        assert_eq!(g[0], 0.0);
    }

    #[test]
    fn gradient_pushes_prediction_towards_label() {
        let mlae = MlaeLoss::new(10.0).unwrap();
        let g = mlae.gradient(&[2.0, 2.0], &[1.0, 3.0]).unwrap();
        // Under-prediction: raising p lowers the loss, so the gradient is negative.
        assert!(g[0] < 0.0);
        assert!(g[1] > 0.0);
        assert!((g[0] + 10.0 / 11.0 / 2.0).abs() < 1e-12);
    }
}
