use serde::{Serialize, Deserialize};

use crate::data::error::DataError;

/// Feature rows with one scalar regression target each.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
}

impl Dataset {
    /// # Panics
    /// Panics if `features` and `targets` differ in length.
    pub fn new(features: Vec<Vec<f64>>, targets: Vec<f64>) -> Dataset {
        assert_eq!(features.len(), targets.len(), "features and targets must have equal length");
        Dataset { features, targets }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn n_features(&self) -> usize {
        self.features.first().map_or(0, Vec::len)
    }

    /// Splits off the last `validation_fraction` of rows as a validation set,
    /// without shuffling. Returns `(train, validation)`.
    pub fn split(&self, validation_fraction: f64) -> Result<(Dataset, Dataset), DataError> {
        if !(0.0..1.0).contains(&validation_fraction) {
            return Err(DataError::InvalidSplit(validation_fraction));
        }
        let split_at = (self.len() as f64 * (1.0 - validation_fraction)) as usize;
        let train = Dataset::new(self.features[..split_at].to_vec(), self.targets[..split_at].to_vec());
        let val = Dataset::new(self.features[split_at..].to_vec(), self.targets[split_at..].to_vec());
        Ok((train, val))
    }

    /// Same rows with every target divided by `scaling.divisor`.
    pub fn scaled(&self, scaling: &LabelScaling) -> Dataset {
        Dataset {
            features: self.features.clone(),
            targets: self.targets.iter().map(|&t| scaling.to_training(t)).collect(),
        }
    }
}

/// Per-feature z-score standardisation fitted on training data only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standardizer {
    pub mean: Vec<f64>,
    pub std_dev: Vec<f64>,
}

impl Standardizer {
    pub fn fit(data: &Dataset) -> Standardizer {
        let d = data.n_features();
        let n = data.len().max(1) as f64;
        let mut mean = vec![0.0; d];
        for row in &data.features {
            for (m, x) in mean.iter_mut().zip(row) {
                *m += x / n;
            }
        }
        let mut var = vec![0.0; d];
        for row in &data.features {
            for ((v, x), m) in var.iter_mut().zip(row).zip(&mean) {
                *v += (x - m).powi(2) / n;
            }
        }
        Standardizer { mean, std_dev: var.into_iter().map(f64::sqrt).collect() }
    }

    /// Zero-variance features map to 0.
    pub fn transform_row(&self, row: &[f64]) -> Vec<f64> {
        row.iter().zip(&self.mean).zip(&self.std_dev)
            .map(|((x, m), s)| if *s > 0.0 { (x - m) / s } else { 0.0 })
            .collect()
    }

    pub fn transform(&self, data: &Dataset) -> Dataset {
        Dataset {
            features: data.features.iter().map(|r| self.transform_row(r)).collect(),
            targets: data.targets.clone(),
        }
    }
}

/// Divides labels for training and multiplies predictions back for reporting.
///
/// The log-absolute losses multiply by their `scale` before the relu, so
/// `scale` should equal `divisor` to compare values in natural units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelScaling {
    pub divisor: f64,
}

impl LabelScaling {
    pub fn new(divisor: f64) -> Result<LabelScaling, DataError> {
        if !(divisor.is_finite() && divisor > 0.0) {
            return Err(DataError::InvalidDivisor(divisor));
        }
        Ok(LabelScaling { divisor })
    }

    pub fn to_training(&self, label: f64) -> f64 {
        label / self.divisor
    }

    pub fn to_natural(&self, value: f64) -> f64 {
        value * self.divisor
    }
}

impl Default for LabelScaling {
    fn default() -> Self {
        LabelScaling { divisor: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy(n: usize) -> Dataset {
        Dataset::new(
            (0..n).map(|i| vec![i as f64, 5.0]).collect(),
            (0..n).map(|i| 1000.0 * i as f64).collect(),
        )
    }

    #[test]
    fn split_takes_validation_from_the_tail() {
        let (train, val) = toy(10).split(0.2).unwrap();
        assert_eq!(train.len(), 8);
        assert_eq!(val.len(), 2);
        assert_eq!(val.targets, vec![8000.0, 9000.0]);
    }

    #[test]
    fn split_rejects_out_of_range_fractions() {
        assert!(matches!(toy(4).split(1.0), Err(DataError::InvalidSplit(_))));
        assert!(toy(4).split(-0.1).is_err());
        assert_eq!(toy(4).split(0.0).unwrap().1.len(), 0);
    }

    #[test]
    fn standardizer_centres_and_handles_constant_columns() {
        let ds = toy(4);
        let s = Standardizer::fit(&ds);
        let t = s.transform(&ds);
        let col0: f64 = t.features.iter().map(|r| r[0]).sum();
        assert!(col0.abs() < 1e-12);
        assert!(t.features.iter().all(|r| r[1] == 0.0));
    }

    #[test]
    fn label_scaling_round_trips_units() {
        let s = LabelScaling::new(1000.0).unwrap();
        let scaled = toy(3).scaled(&s);
        assert_eq!(scaled.targets, vec![0.0, 1.0, 2.0]);
        assert_eq!(s.to_natural(2.5), 2500.0);
        assert!(LabelScaling::new(0.0).is_err());
        assert!(matches!(LabelScaling::new(-1000.0), Err(DataError::InvalidDivisor(_))));
        assert!(LabelScaling::new(f64::NAN).is_err());
    }
}
