pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod metric;
pub mod optim;
pub mod data;
pub mod train;
pub mod experiment;
pub mod error;
pub mod logging;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Dense;
pub use network::{Network, NetworkSpec};
pub use loss::{Loss, LossContext, LossError, LossType, MlaeLoss, MseLoss, MsleLoss, MslaeLoss};
pub use metric::{MaeMetric, Metric, MetricType};
pub use optim::{Adam, Optimizer, OptimizerConfig, Sgd};
pub use data::{Dataset, LabelScaling, Standardizer};
pub use train::{train_loop, History, TrainConfig};
pub use experiment::{run_experiment, ExperimentConfig};
pub use error::{Error, Result};
