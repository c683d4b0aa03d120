use thiserror::Error;

/// Contract violations reported by every loss and metric.
///
/// Numerical trouble (NaN, infinity) is *not* an error here: it flows out in
/// the returned value so the trainer can decide what to do with the batch.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LossError {
    #[error("shape mismatch: y_true has {y_true} elements, y_pred has {y_pred}")]
    ShapeMismatch { y_true: usize, y_pred: usize },
    #[error("cannot reduce an empty batch")]
    EmptyBatch,
    #[error("label scale must be finite and positive, got {0}")]
    InvalidScale(f64),
}
