use crate::loss::context::DEFAULT_EPSILON;
use crate::loss::{check_shapes, Loss, LossError};

/// Mean squared logarithmic error with a lower clip at `epsilon`.
///
/// Both labels and predictions are clipped to `[epsilon, +inf)` *before*
/// adding one, so every `ln` argument is at least `1 + epsilon`. Negative
/// predictions therefore land on `ln(1 + epsilon)`, which is close to but
/// not exactly zero.
pub struct MsleLoss {
    epsilon: f64,
}

impl MsleLoss {
    pub fn new(epsilon: f64) -> Self {
        MsleLoss { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    fn log1p_clipped(&self, v: f64) -> f64 {
        (clip_low(v, self.epsilon) + 1.0).ln()
    }
}

impl Default for MsleLoss {
    fn default() -> Self {
        MsleLoss::new(DEFAULT_EPSILON)
    }
}

/// `max(v, lo)` that keeps NaN as NaN (`f64::max` would swallow it).
fn clip_low(v: f64, lo: f64) -> f64 {
    if v < lo { lo } else { v }
}

impl Loss for MsleLoss {
    fn name(&self) -> &'static str {
        "mean_squared_logarithmic_error"
    }

    /// Scalar MSLE: mean((ln(clip(p)+1) - ln(clip(t)+1))²)
    fn loss(&self, y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
        let n = check_shapes(y_true, y_pred)? as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(&t, &p)| (self.log1p_clipped(p) - self.log1p_clipped(t)).powi(2))
            .sum::<f64>() / n)
    }

    /// Per-output gradient: 2·(a - b) / (n·(p + 1)), zero where p is clipped.
    fn gradient(&self, y_true: &[f64], y_pred: &[f64]) -> Result<Vec<f64>, LossError> {
        let n = check_shapes(y_true, y_pred)? as f64;
        Ok(y_true.iter().zip(y_pred.iter())
            .map(|(&t, &p)| {
                if p < self.epsilon {
                    return 0.0;
                }
                let diff = self.log1p_clipped(p) - self.log1p_clipped(t);
                2.0 * diff / (n * (p + 1.0))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_non_negative_vectors_give_zero() {
        let y = [0.0, 1.0, 2.0, 350.0];
        assert!(MsleLoss::default().loss(&y, &y).unwrap().abs() < 1e-15);
    }

    #[test]
    fn negative_prediction_is_floored_at_epsilon() {
        let msle = MsleLoss::default();
        let loss = msle.loss(&[1.0], &[-5.0]).unwrap();
        let floor = (DEFAULT_EPSILON + 1.0).ln();
        assert!(floor > 0.0);
        let expected = (floor - 2.0_f64.ln()).powi(2);
        assert!((loss - expected).abs() < 1e-12);
    }

    #[test]
    fn clipped_prediction_has_no_gradient() {
        let g = MsleLoss::default().gradient(&[1.0, 1.0], &[-3.0, 3.0]).unwrap();
        assert_eq!(g[0], 0.0);
        // 2·(ln 4 - ln 2) / (2·4)
        let expected = 2.0 * (4.0_f64.ln() - 2.0_f64.ln()) / 8.0;
        assert!((g[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn nan_prediction_is_not_masked_by_clip() {
        assert!(MsleLoss::default().loss(&[1.0], &[f64::NAN]).unwrap().is_nan());
    }
}
