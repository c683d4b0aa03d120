use std::path::Path;

use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use tracing::{info, warn};

use crate::data::{Dataset, LabelScaling, Standardizer};
use crate::error::Result;
use crate::experiment::config::ExperimentConfig;
use crate::loss::{LossContext, LossType};
use crate::metric::{MaeMetric, Metric};
use crate::network::NetworkSpec;
use crate::train::{train_loop, History, TrainConfig, TrainError};

/// Outcome of training one network with one loss.
#[derive(Debug, Clone, Serialize)]
pub struct LossReport {
    pub loss: LossType,
    /// Training loss of the last completed epoch, in training units.
    pub final_loss: f64,
    /// Mean absolute error on the validation rows, in original label units.
    pub val_mae: f64,
    /// Set when training stopped on a non-finite loss.
    pub diverged: Option<String>,
    pub history: History,
}

/// Trains the configured topology once per loss on the same split and
/// reports the validation MAE of each in original units.
pub fn run_experiment(data: &Dataset, config: &ExperimentConfig) -> Result<Vec<LossReport>> {
    let scaling = LabelScaling::new(config.label_divisor)?;
    let (train_raw, val_raw) = data.split(config.validation_split)?;
    // Without validation rows, report on the training rows instead.
    let val_raw = if val_raw.is_empty() { train_raw.clone() } else { val_raw };

    let standardizer = Standardizer::fit(&train_raw);
    let train = standardizer.transform(&train_raw).scaled(&scaling);
    let val = standardizer.transform(&val_raw).scaled(&scaling);

    let ctx = LossContext::new(config.epsilon, config.label_divisor);
    let metric = config.metric.build();
    let spec = NetworkSpec::regression(data.n_features(), config.hidden[0], config.hidden[1]);

    info!(
        train_rows = train.len(),
        val_rows = val.len(),
        features = data.n_features(),
        losses = config.losses.len(),
        "running loss comparison"
    );

    let mut reports = Vec::with_capacity(config.losses.len());
    for &loss_type in &config.losses {
        let loss = loss_type.build(&ctx)?;
        let mut network = spec.build(&mut StdRng::seed_from_u64(config.seed));
        let mut optimizer = config.optimizer.build();
        let train_config = TrainConfig::new(config.epochs, config.batch_size)
            .with_seed(config.seed)
            .with_non_finite(config.non_finite);

        let (history, diverged) = match train_loop(
            &mut network,
            optimizer.as_mut(),
            loss.as_ref(),
            metric.as_ref(),
            &train,
            Some(&val),
            &train_config,
        ) {
            Ok(history) => (history, None),
            Err(e @ TrainError::NonFiniteLoss { .. }) => {
                warn!(loss = %loss_type, error = %e, "training diverged");
                (History::default(), Some(e.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let val_mae = if diverged.is_some() {
            f64::NAN
        } else {
            let predicted: Vec<f64> = network.predict(&val.features)
                .into_iter()
                .map(|p| scaling.to_natural(p))
                .collect();
            MaeMetric.evaluate(&val_raw.targets, &predicted)?
        };

        if let (Some(dir), None) = (&config.model_dir, &diverged) {
            std::fs::create_dir_all(dir)?;
            let path = Path::new(dir).join(format!("{loss_type}.json"));
            network.save_json(&path.to_string_lossy())?;
        }

        let final_loss = history.last().map_or(f64::NAN, |e| e.loss);
        info!(loss = %loss_type, final_loss, val_mae, "loss finished");
        reports.push(LossReport { loss: loss_type, final_loss, val_mae, diverged, history });
    }
    Ok(reports)
}

/// Renders reports as a fixed-width table, best validation MAE first.
pub fn summary_table(reports: &[LossReport]) -> String {
    let mut sorted: Vec<&LossReport> = reports.iter().collect();
    sorted.sort_by(|a, b| a.val_mae.total_cmp(&b.val_mae));
    let mut out = format!("{:<8} {:>14} {:>14}  {}\n", "loss", "final_loss", "val_mae", "status");
    for r in sorted {
        let status = r.diverged.as_deref().unwrap_or("ok");
        out.push_str(&format!("{:<8} {:>14.6} {:>14.4}  {}\n", r.loss, r.final_loss, r.val_mae, status));
    }
    out
}
