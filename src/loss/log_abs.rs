use crate::loss::LossError;

/// `ln(relu(v · scale) + 1)`, the shared element transform of the
/// log-absolute losses.
///
/// relu maps every non-positive input to exactly zero, so `ln(0 + 1) = 0`
/// with no epsilon residue. NaN passes through unchanged.
#[inline]
pub(crate) fn log1p_relu(v: f64, scale: f64) -> f64 {
    let x = v * scale;
    let r = if x < 0.0 { 0.0 } else { x };
    (r + 1.0).ln()
}

/// d/dv of `log1p_relu`: scale / (v·scale + 1) on the positive side, 0 otherwise.
#[inline]
pub(crate) fn log1p_relu_derivative(v: f64, scale: f64) -> f64 {
    let x = v * scale;
    if x > 0.0 { scale / (x + 1.0) } else { 0.0 }
}

/// Sign with `sign(0) = 0`, used as the subgradient of `|x|`. NaN stays NaN.
#[inline]
pub(crate) fn sign(x: f64) -> f64 {
    if x.is_nan() { x } else if x > 0.0 { 1.0 } else if x < 0.0 { -1.0 } else { 0.0 }
}

pub(crate) fn validate_scale(scale: f64) -> Result<(), LossError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(LossError::InvalidScale(scale))
    }
}
