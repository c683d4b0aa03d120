use thiserror::Error;

use crate::data::DataError;
use crate::loss::LossError;
use crate::train::TrainError;

/// Top-level error for experiment runs and file I/O.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Loss(#[from] LossError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Train(#[from] TrainError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
