use crate::loss::context::DEFAULT_SCALE;
use crate::loss::log_abs::{log1p_relu, log1p_relu_derivative, validate_scale};
use crate::loss::{check_shapes, Loss, LossError};

/// Mean squared log absolute error: mean(|ln(relu(t·s)+1) - ln(relu(p·s)+1)|²).
///
/// Same element transform as [`MlaeLoss`](crate::loss::MlaeLoss), squared
/// instead of taken in absolute value.
pub struct MslaeLoss {
    scale: f64,
}

impl MslaeLoss {
    /// Fails unless `scale` is finite and strictly positive; a negative
    /// scale would flip which side the relu rectifies.
    pub fn new(scale: f64) -> Result<Self, LossError> {
        validate_scale(scale)?;
        Ok(MslaeLoss { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for MslaeLoss {
    fn default() -> Self {
        MslaeLoss { scale: DEFAULT_SCALE }
    }
}

impl Loss for MslaeLoss {
    fn name(&self) -> &'static str {
        "mean_squared_log_absolute_error"
    }

    fn loss(&self, y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
        let n = check_shapes(y_true, y_pred)? as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(&t, &p)| (log1p_relu(t, self.scale) - log1p_relu(p, self.scale)).abs().powi(2))
            .sum::<f64>() / n)
    }

    /// Per-output gradient: -2·(a - b) · b'(p) / n
    fn gradient(&self, y_true: &[f64], y_pred: &[f64]) -> Result<Vec<f64>, LossError> {
        let n = check_shapes(y_true, y_pred)? as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(&t, &p)| {
                let diff = log1p_relu(t, self.scale) - log1p_relu(p, self.scale);
                -2.0 * diff * log1p_relu_derivative(p, self.scale) / n
            })
            .collect())
    }
}
