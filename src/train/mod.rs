pub mod epoch_stats;
pub mod error;
pub mod train_config;
pub mod loop_fn;

pub use epoch_stats::{EpochStats, History};
pub use error::TrainError;
pub use train_config::{NonFinitePolicy, TrainConfig};
pub use loop_fn::{evaluate, train_loop, Evaluation};
