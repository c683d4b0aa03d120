use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// `loss` and `metric` are batch-size-weighted means over the batches that
/// were applied this epoch; skipped batches are counted in `skipped` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub loss: f64,
    pub metric: f64,
    pub val_loss: Option<f64>,
    pub val_metric: Option<f64>,
    /// Batches dropped under `NonFinitePolicy::SkipBatch`.
    pub skipped: usize,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

/// Ordered per-epoch statistics for one training run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub epochs: Vec<EpochStats>,
}

impl History {
    pub fn push(&mut self, stats: EpochStats) {
        self.epochs.push(stats);
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    pub fn last(&self) -> Option<&EpochStats> {
        self.epochs.last()
    }

    /// Lowest finite validation metric and the epoch it was reached in.
    pub fn best_val_metric(&self) -> Option<(usize, f64)> {
        self.epochs.iter()
            .filter_map(|e| e.val_metric.filter(|m| m.is_finite()).map(|m| (e.epoch, m)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(epoch: usize, val_metric: Option<f64>) -> EpochStats {
        EpochStats { epoch, loss: 1.0, metric: 1.0, val_loss: None, val_metric, skipped: 0, elapsed_ms: 0 }
    }

    #[test]
    fn best_val_metric_ignores_missing_and_nan() {
        let mut h = History::default();
        h.push(stats(1, Some(3.0)));
        h.push(stats(2, Some(f64::NAN)));
        h.push(stats(3, Some(1.5)));
        h.push(stats(4, None));
        assert_eq!(h.best_val_metric(), Some((3, 1.5)));
        assert_eq!(h.last().unwrap().epoch, 4);
    }
}
