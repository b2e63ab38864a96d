//! Physical-domain checks applied before the model is invoked.

use crate::field::InputField;
use hc_core::Real;
use hc_model::DiffusivityInputs;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{field} = {value} is outside the valid range ({reason})")]
    OutOfRange {
        field: InputField,
        value: Real,
        reason: &'static str,
    },
}

impl DomainError {
    pub fn field(&self) -> InputField {
        match self {
            Self::OutOfRange { field, .. } => *field,
        }
    }
}

/// Check every precondition of the correlation, reporting the first violation
/// in input-form order.
pub fn validate_inputs(inputs: &DiffusivityInputs) -> Result<(), DomainError> {
    for field in InputField::ALL {
        let value = field.get(inputs);
        if let Some(reason) = violation(field, value) {
            return Err(DomainError::OutOfRange {
                field,
                value,
                reason,
            });
        }
    }
    Ok(())
}

fn violation(field: InputField, value: Real) -> Option<&'static str> {
    if !value.is_finite() {
        return Some("must be finite");
    }
    match field {
        InputField::MoleFractionA if value <= 0.0 || value >= 1.0 => {
            Some("mole fraction must lie strictly between 0 and 1")
        }
        InputField::DiffusivityAB0 | InputField::DiffusivityBA0 if value <= 0.0 => {
            Some("infinite-dilution diffusivity must be positive")
        }
        InputField::VolumeA | InputField::VolumeB if value <= 0.0 => {
            Some("volume parameter must be positive")
        }
        InputField::SurfaceAreaA | InputField::SurfaceAreaB if value <= 0.0 => {
            Some("surface-area parameter must be positive")
        }
        InputField::Temperature if value <= 0.0 => Some("absolute temperature must be > 0 K"),
        // Negative D_exp would also flip the sign of the relative error.
        InputField::ExperimentalDiffusivity if value <= 0.0 => {
            Some("experimental diffusivity must be positive")
        }
        _ => None,
    }
}
