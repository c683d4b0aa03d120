pub mod csv;
pub mod dataset;
pub mod error;
pub mod synthetic;

pub use csv::TargetColumn;
pub use dataset::{Dataset, LabelScaling, Standardizer};
pub use error::DataError;
pub use synthetic::synthetic_housing;
