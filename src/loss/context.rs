use serde::{Deserialize, Serialize};

/// Framework-standard floating point fuzz factor used by the clipping losses.
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// Scale used by the log-absolute losses in the housing scenario, where
/// labels are stored in thousands.
pub const DEFAULT_SCALE: f64 = 1000.0;

/// Numeric settings bound into a loss at construction time.
///
/// - `epsilon` — lower clip bound for `MeanSquaredLogarithmicError`
/// - `scale`   — multiplier applied to labels before the relu in the
///               log-absolute losses; must match the label units upstream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossContext {
    pub epsilon: f64,
    pub scale: f64,
}

impl LossContext {
    pub fn new(epsilon: f64, scale: f64) -> Self {
        LossContext { epsilon, scale }
    }

    /// Same epsilon, different label scale.
    pub fn with_scale(self, scale: f64) -> Self {
        LossContext { scale, ..self }
    }
}

impl Default for LossContext {
    fn default() -> Self {
        LossContext { epsilon: DEFAULT_EPSILON, scale: DEFAULT_SCALE }
    }
}
