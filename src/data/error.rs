use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV file is not valid UTF-8")]
    NotUtf8,
    #[error("row {row}: '{cell}' is not a valid number")]
    Parse { row: usize, cell: String },
    #[error("row {row}: expected {expected} columns, got {found}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("target column '{0}' not found in header")]
    MissingColumn(String),
    #[error("dataset needs at least one feature column and a target column")]
    TooFewColumns,
    #[error("CSV contains no data rows after parsing")]
    NoRows,
    #[error("validation fraction {0} must be in [0, 1)")]
    InvalidSplit(f64),
    #[error("label divisor must be finite and positive, got {0}")]
    InvalidDivisor(f64),
}
