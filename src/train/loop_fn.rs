use std::time::Instant;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, info, warn};

use crate::data::dataset::Dataset;
use crate::layers::dense::Gradients;
use crate::loss::{Loss, LossError};
use crate::metric::Metric;
use crate::network::network::Network;
use crate::optim::Optimizer;
use crate::train::epoch_stats::{EpochStats, History};
use crate::train::error::TrainError;
use crate::train::train_config::{NonFinitePolicy, TrainConfig};

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs, minimising `loss` and
/// reporting `metric` alongside it.
///
/// The loss is called once per mini-batch on the batch's label and
/// prediction vectors; its gradient drives backprop. The metric never
/// influences the weights.
///
/// Returns `TrainError::NonFiniteLoss` on the first NaN/inf batch loss when
/// `config.non_finite` is `Abort`.
pub fn train_loop(
    network: &mut Network,
    optimizer: &mut dyn Optimizer,
    loss: &dyn Loss,
    metric: &dyn Metric,
    train: &Dataset,
    validation: Option<&Dataset>,
    config: &TrainConfig,
) -> Result<History, TrainError> {
    if train.is_empty() {
        return Err(TrainError::EmptyDataset);
    }
    if config.batch_size == 0 {
        return Err(TrainError::ZeroBatchSize);
    }
    if train.n_features() != network.input_size() {
        return Err(TrainError::InputWidth { expected: network.input_size(), found: train.n_features() });
    }
    if network.output_size() != 1 {
        return Err(TrainError::OutputWidth(network.output_size()));
    }

    info!(
        loss = loss.name(),
        metric = metric.name(),
        samples = train.len(),
        epochs = config.epochs,
        batch_size = config.batch_size,
        "starting training"
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(rand::thread_rng()).unwrap_or_else(|_| StdRng::seed_from_u64(0)),
    };
    let mut indices: Vec<usize> = (0..train.len()).collect();
    let mut history = History::default();

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        if config.shuffle {
            indices.shuffle(&mut rng);
        }

        let pass = run_one_epoch(network, optimizer, loss, metric, train, &indices, epoch, config)?;

        let (val_loss, val_metric) = match validation.filter(|v| !v.is_empty()) {
            Some(v) => {
                let eval = evaluate(network, loss, metric, v)?;
                (Some(eval.loss), Some(eval.metric))
            }
            None => (None, None),
        };

        let stats = EpochStats {
            epoch,
            loss: pass.loss,
            metric: pass.metric,
            val_loss,
            val_metric,
            skipped: pass.skipped,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        debug!(
            epoch,
            loss = stats.loss,
            metric = stats.metric,
            val_loss = ?stats.val_loss,
            val_metric = ?stats.val_metric,
            "epoch complete"
        );
        history.push(stats);
    }

    if let Some(last) = history.last() {
        info!(epochs = history.len(), loss = last.loss, metric = last.metric, "training finished");
    }
    Ok(history)
}

/// Loss and metric of a network over a whole dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub loss: f64,
    pub metric: f64,
}

/// Evaluates `loss` and `metric` over all of `data` in a single reduction.
pub fn evaluate(
    network: &mut Network,
    loss: &dyn Loss,
    metric: &dyn Metric,
    data: &Dataset,
) -> Result<Evaluation, LossError> {
    let predictions = network.predict(&data.features);
    Ok(Evaluation {
        loss: loss.loss(&data.targets, &predictions)?,
        metric: metric.evaluate(&data.targets, &predictions)?,
    })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

struct EpochPass {
    loss: f64,
    metric: f64,
    skipped: usize,
}

/// Runs one full epoch of mini-batch updates over `indices`.
#[allow(clippy::too_many_arguments)]
fn run_one_epoch(
    network: &mut Network,
    optimizer: &mut dyn Optimizer,
    loss: &dyn Loss,
    metric: &dyn Metric,
    train: &Dataset,
    indices: &[usize],
    epoch: usize,
    config: &TrainConfig,
) -> Result<EpochPass, TrainError> {
    let mut loss_sum = 0.0;
    let mut metric_sum = 0.0;
    let mut applied = 0usize;
    let mut skipped = 0usize;

    for (batch, chunk) in indices.chunks(config.batch_size).enumerate() {
        let y_true: Vec<f64> = chunk.iter().map(|&i| train.targets[i]).collect();
        let y_pred: Vec<f64> = chunk.iter()
            .map(|&i| network.forward(&train.features[i])[0])
            .collect();

        let batch_loss = loss.loss(&y_true, &y_pred)?;
        if !batch_loss.is_finite() {
            match config.non_finite {
                NonFinitePolicy::Abort => {
                    return Err(TrainError::NonFiniteLoss { epoch, batch });
                }
                NonFinitePolicy::SkipBatch => {
                    warn!(epoch, batch, "skipping batch with non-finite loss");
                    skipped += 1;
                    continue;
                }
            }
        }
        let batch_metric = metric.evaluate(&y_true, &y_pred)?;

        // The loss gradient already carries the 1/batch factor, so per-sample
        // parameter gradients are summed.
        let output_grad = loss.gradient(&y_true, &y_pred)?;
        let mut acc: Vec<Gradients> = network.layers.iter().map(Gradients::zeros_like).collect();
        for (&i, &g) in chunk.iter().zip(&output_grad) {
            // Layers cache a single sample, so re-run forward before backward.
            network.forward(&train.features[i]);
            for (a, layer_grad) in acc.iter_mut().zip(network.backward(&[g])) {
                a.accumulate(&layer_grad, 1.0);
            }
        }
        optimizer.step(network, &acc);

        let w = chunk.len() as f64;
        loss_sum += batch_loss * w;
        metric_sum += batch_metric * w;
        applied += chunk.len();
    }

    let (loss, metric) = if applied == 0 {
        (f64::NAN, f64::NAN)
    } else {
        (loss_sum / applied as f64, metric_sum / applied as f64)
    };
    Ok(EpochPass { loss, metric, skipped })
}
