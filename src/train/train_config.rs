use serde::{Serialize, Deserialize};

/// What the training loop does when a batch loss comes back NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Stop and return `TrainError::NonFiniteLoss`.
    #[default]
    Abort,
    /// Drop the batch without updating weights and keep going.
    SkipBatch,
}

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`      — total number of full passes over the training data
/// - `batch_size`  — samples per mini-batch; the loss is evaluated once per batch
/// - `shuffle`     — reshuffle sample order at the start of every epoch
/// - `seed`        — seeds the shuffle; `None` uses the thread RNG
/// - `non_finite`  — reaction to a NaN/inf batch loss
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub shuffle: bool,
    pub seed: Option<u64>,
    pub non_finite: NonFinitePolicy,
}

impl TrainConfig {
    /// Shuffled, unseeded, aborting on non-finite loss.
    pub fn new(epochs: usize, batch_size: usize) -> Self {
        TrainConfig {
            epochs,
            batch_size,
            shuffle: true,
            seed: None,
            non_finite: NonFinitePolicy::Abort,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }
}
