use crate::loss::{check_shapes, LossError};
use crate::metric::Metric;

/// Mean absolute error, reported in label units.
pub struct MaeMetric;

impl Metric for MaeMetric {
    fn name(&self) -> &'static str {
        "mean_absolute_error"
    }

    /// Scalar MAE: mean(|y_pred - y_true|)
    fn evaluate(&self, y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
        let n = check_shapes(y_true, y_pred)? as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(t, p)| (p - t).abs())
            .sum::<f64>() / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_absolute_errors() {
        let v = MaeMetric.evaluate(&[1.0, 2.0, 3.0], &[2.0, 2.0, 0.0]).unwrap();
        assert!((v - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_shape_mismatch() {
        assert!(MaeMetric.evaluate(&[1.0], &[1.0, 2.0]).is_err());
    }
}
