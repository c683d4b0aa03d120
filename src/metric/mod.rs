//! Reporting metrics. These are evaluated alongside the training loss but
//! never drive optimisation, so any `MetricType` pairs with any `LossType`.

pub mod mae;

use serde::{Serialize, Deserialize};

use crate::loss::{Loss, LossError, MseLoss};
pub use mae::MaeMetric;

pub trait Metric: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError>;
}

/// Mean squared error doubles as a metric.
impl Metric for MseLoss {
    fn name(&self) -> &'static str {
        "mean_squared_error"
    }

    fn evaluate(&self, y_true: &[f64], y_pred: &[f64]) -> Result<f64, LossError> {
        self.loss(y_true, y_pred)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    #[default]
    Mae,
    Mse,
}

impl MetricType {
    pub fn build(self) -> Box<dyn Metric> {
        match self {
            MetricType::Mae => Box::new(MaeMetric),
            MetricType::Mse => Box::new(MseLoss),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::{LossContext, LossType};

    #[test]
    fn metric_is_independent_of_the_loss() {
        let (t, p) = ([100.0, 200.0], [110.0, 150.0]);
        let mae = MetricType::Mae.build().evaluate(&t, &p).unwrap();
        for lt in LossType::ALL {
            let loss = lt.build(&LossContext::default()).unwrap().loss(&t, &p).unwrap();
            assert_ne!(loss, mae, "{lt} must not alias the reporting metric");
        }
        assert_eq!(mae, 30.0);
    }
}
