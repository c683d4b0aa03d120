//! Regression losses behind one calling convention:
//! `loss(y_true, y_pred) -> LossValue`, element-wise then mean-reduced.

pub mod context;
pub mod error;
pub mod loss_type;
pub mod mse;
pub mod msle;
pub mod mlae;
pub mod mslae;
mod log_abs;

pub use context::LossContext;
pub use error::LossError;
pub use loss_type::LossType;
pub use mse::MseLoss;
pub use msle::MsleLoss;
pub use mlae::MlaeLoss;
pub use mslae::MslaeLoss;

/// A scalar loss over a batch of labels.
///
/// Implementations are pure and hold only immutable configuration, so one
/// instance may be shared across threads and called concurrently.
pub trait Loss: Send + Sync {
    fn name(&self) -> &'static str;

    /// Mean loss over the batch. Fails only on a shape contract violation;
    /// NaN or infinite inputs come back as a non-finite value.
    fn loss(&self, y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError>;

    /// ∂loss/∂y_pred[i] for every element, including the 1/n of the mean.
    fn gradient(&self, y_true: &[f64], y_pred: &[f64]) -> Result<Vec<f64>, LossError>;
}

/// Validates the pair and returns the shared length.
pub(crate) fn check_shapes(y_true: &[f64], y_pred: &[f64]) -> Result<usize, LossError> {
    if y_true.len() != y_pred.len() {
        return Err(LossError::ShapeMismatch { y_true: y_true.len(), y_pred: y_pred.len() });
    }
    if y_true.is_empty() {
        return Err(LossError::EmptyBatch);
    }
    Ok(y_true.len())
}

// Plain-function forms for callers that do not need a trait object.

pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
    MseLoss.loss(y_true, y_pred)
}

pub fn mean_squared_logarithmic_error(
    y_true: &[f64],
    y_pred: &[f64],
    ctx: &LossContext,
) -> Result<f64, LossError> {
    MsleLoss::new(ctx.epsilon).loss(y_true, y_pred)
}

pub fn mean_log_absolute_error(
    y_true: &[f64],
    y_pred: &[f64],
    ctx: &LossContext,
) -> Result<f64, LossError> {
    MlaeLoss::new(ctx.scale)?.loss(y_true, y_pred)
}

pub fn mean_squared_log_absolute_error(
    y_true: &[f64],
    y_pred: &[f64],
    ctx: &LossContext,
) -> Result<f64, LossError> {
    MslaeLoss::new(ctx.scale)?.loss(y_true, y_pred)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_loss_rejects_mismatched_lengths() {
        let ctx = LossContext::default();
        for lt in LossType::ALL {
            let loss = lt.build(&ctx).unwrap();
            let err = loss.loss(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
            assert_eq!(err, LossError::ShapeMismatch { y_true: 3, y_pred: 2 });
            assert!(loss.gradient(&[1.0, 2.0, 3.0], &[1.0, 2.0]).is_err());
        }
    }

    #[test]
    fn every_loss_rejects_empty_batches() {
        let ctx = LossContext::default();
        for lt in LossType::ALL {
            assert_eq!(lt.build(&ctx).unwrap().loss(&[], &[]).unwrap_err(), LossError::EmptyBatch);
        }
    }

    #[test]
    fn perfect_predictions_score_zero_everywhere() {
        let ctx = LossContext::default();
        let y = [1.0, 2.0];
        assert_eq!(mean_squared_error(&y, &y).unwrap(), 0.0);
        assert!(mean_squared_logarithmic_error(&y, &y, &ctx).unwrap().abs() < f64::EPSILON);
        assert_eq!(mean_log_absolute_error(&y, &y, &ctx).unwrap(), 0.0);
        assert_eq!(mean_squared_log_absolute_error(&y, &y, &ctx).unwrap(), 0.0);
    }

    #[test]
    fn clip_and_relu_disagree_on_negative_predictions() {
        let ctx = LossContext::new(1e-7, 1.0);
        // With y_true = 0 both sides of the relu loss are ln(1) = 0 exactly,
        // while the clip loss compares ln(1+eps) against ln(1+eps).
        let relu = mean_log_absolute_error(&[0.0], &[-3.0], &ctx).unwrap();
        assert_eq!(relu, 0.0);
        let clipped = mean_squared_logarithmic_error(&[1.0], &[-3.0], &ctx).unwrap();
        let rectified = mean_squared_log_absolute_error(&[1.0], &[-3.0], &ctx).unwrap();
        assert!(clipped < rectified);
    }

    #[test]
    fn losses_are_shareable_across_threads() {
        let loss: std::sync::Arc<dyn Loss> = std::sync::Arc::from(LossType::Msle.build(&LossContext::default()).unwrap());
        let handles: Vec<_> = (0..4).map(|i| {
            let loss = loss.clone();
            std::thread::spawn(move || loss.loss(&[i as f64], &[i as f64 + 1.0]).unwrap())
        }).collect();
        for h in handles {
            assert!(h.join().unwrap() > 0.0);
        }
    }
}
