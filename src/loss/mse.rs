use crate::loss::{check_shapes, Loss, LossError};

pub struct MseLoss;

impl MseLoss {
    pub fn new() -> Self {
        MseLoss
    }
}

impl Default for MseLoss {
    fn default() -> Self {
        MseLoss
    }
}

impl Loss for MseLoss {
    fn name(&self) -> &'static str {
        "mean_squared_error"
    }

    /// Scalar MSE: mean((y_pred - y_true)²)
    fn loss(&self, y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
        let n = check_shapes(y_true, y_pred)? as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(t, p)| (p - t).powi(2))
            .sum::<f64>() / n)
    }

    /// Per-output gradient: 2·(y_pred - y_true) / n
    fn gradient(&self, y_true: &[f64], y_pred: &[f64]) -> Result<Vec<f64>, LossError> {
        let n = check_shapes(y_true, y_pred)? as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(t, p)| 2.0 * (p - t) / n)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element_difference_of_two() {
        let loss = MseLoss.loss(&[2.0], &[4.0]).unwrap();
        assert_eq!(loss, 4.0);
    }

    #[test]
    fn zero_iff_equal() {
        assert_eq!(MseLoss.loss(&[1.0, 2.0], &[1.0, 2.0]).unwrap(), 0.0);
        assert!(MseLoss.loss(&[1.0, 2.0], &[1.0, 2.5]).unwrap() > 0.0);
    }

    #[test]
    fn mean_not_sum() {
        // ((0.5-0.4)² + (0.8-0.9)²) / 2 = 0.01
        let loss = MseLoss.loss(&[0.4, 0.9], &[0.5, 0.8]).unwrap();
        assert!((loss - 0.01).abs() < 1e-12);
    }

    #[test]
    fn gradient_includes_batch_mean() {
        let g = MseLoss.gradient(&[0.4, 0.9], &[0.5, 0.8]).unwrap();
        assert!((g[0] - 0.1).abs() < 1e-12);
        assert!((g[1] + 0.1).abs() < 1e-12);
    }

    #[test]
    fn nan_propagates() {
        assert!(MseLoss.loss(&[1.0], &[f64::NAN]).unwrap().is_nan());
    }
}
