use thiserror::Error;

use crate::loss::LossError;

#[derive(Debug, Error)]
pub enum TrainError {
    #[error(transparent)]
    Loss(#[from] LossError),
    #[error("non-finite loss in epoch {epoch}, batch {batch}")]
    NonFiniteLoss { epoch: usize, batch: usize },
    #[error("training set is empty")]
    EmptyDataset,
    #[error("batch_size must be at least 1")]
    ZeroBatchSize,
    #[error("regression head must have exactly one output, network has {0}")]
    OutputWidth(usize),
    #[error("network expects {expected} inputs, dataset has {found} features")]
    InputWidth { expected: usize, found: usize },
}
