use serde::{Serialize, Deserialize};

use crate::loss::{Loss, LossContext, LossError, MlaeLoss, MseLoss, MsleLoss, MslaeLoss};

/// Selects which loss function the training loop minimises.
///
/// - `Mse`   — mean squared error; no stabiliser needed.
/// - `Msle`  — mean squared logarithmic error; clips at `LossContext::epsilon`.
/// - `Mlae`  — mean log absolute error; relu then `+1`, scaled by
///   `LossContext::scale`.
/// - `Mslae` — mean squared log absolute error; same transform as `Mlae`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    Mse,
    Msle,
    Mlae,
    Mslae,
}

impl LossType {
    pub const ALL: [LossType; 4] = [LossType::Mse, LossType::Msle, LossType::Mlae, LossType::Mslae];

    /// Builds the concrete loss with its numeric settings bound in.
    pub fn build(self, ctx: &LossContext) -> Result<Box<dyn Loss>, LossError> {
        Ok(match self {
            LossType::Mse   => Box::new(MseLoss::new()),
            LossType::Msle  => Box::new(MsleLoss::new(ctx.epsilon)),
            LossType::Mlae  => Box::new(MlaeLoss::new(ctx.scale)?),
            LossType::Mslae => Box::new(MslaeLoss::new(ctx.scale)?),
        })
    }

    /// Short identifier, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            LossType::Mse   => "mse",
            LossType::Msle  => "msle",
            LossType::Mlae  => "mlae",
            LossType::Mslae => "mslae",
        }
    }
}

impl std::fmt::Display for LossType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&LossType::ALL).unwrap();
        assert_eq!(json, r#"["mse","msle","mlae","mslae"]"#);
        let back: Vec<LossType> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LossType::ALL.to_vec());
    }

    #[test]
    fn build_binds_context() {
        let ctx = LossContext::new(1e-7, 10.0);
        let mlae = LossType::Mlae.build(&ctx).unwrap();
        // ln(relu(0.3·10)+1) - ln(relu(0.1·10)+1) = ln 4 - ln 2
        let v = mlae.loss(&[0.3], &[0.1]).unwrap();
        assert!((v - 2.0_f64.ln()).abs() < 1e-12);
        assert_eq!(mlae.name(), "mean_log_absolute_error");
    }

    #[test]
    fn build_rejects_a_bad_scale_only_where_it_is_used() {
        let ctx = LossContext::new(1e-7, -1.0);
        assert!(LossType::Mse.build(&ctx).is_ok());
        assert!(LossType::Msle.build(&ctx).is_ok());
        assert_eq!(LossType::Mlae.build(&ctx).err(), Some(LossError::InvalidScale(-1.0)));
        assert_eq!(LossType::Mslae.build(&ctx).err(), Some(LossError::InvalidScale(-1.0)));
    }
}
