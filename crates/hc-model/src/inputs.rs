//! Input and output records of a single diffusivity evaluation.

use hc_core::Real;

/// Physicochemical inputs of one binary solute (A) / solvent (B) evaluation.
///
/// Diffusivities are in cm²/s, interaction parameters and temperature in K.
/// No field is validated here; see `hc-input` for the caller-side checks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffusivityInputs {
    /// Mole fraction of solute A, 0 < x_A < 1
    pub x_a: Real,
    /// Infinite-dilution diffusivity of A in B [cm²/s]
    pub d_ab0: Real,
    /// Infinite-dilution diffusivity of B in A [cm²/s]
    pub d_ba0: Real,
    /// UNIFAC surface-area parameter of A
    pub q_a: Real,
    /// UNIFAC surface-area parameter of B
    pub q_b: Real,
    /// UNIFAC volume parameter of A
    pub r_a: Real,
    /// UNIFAC volume parameter of B
    pub r_b: Real,
    /// Interaction energy parameter a_AB [K]
    pub a_ab: Real,
    /// Interaction energy parameter a_BA [K]
    pub a_ba: Real,
    /// Absolute temperature [K]
    pub t: Real,
    /// Experimental reference diffusivity [cm²/s]
    pub d_exp: Real,
}

impl DiffusivityInputs {
    /// Mole fraction of solvent B.
    #[inline]
    pub fn x_b(&self) -> Real {
        1.0 - self.x_a
    }

    /// Copy of these inputs at another solute mole fraction.
    pub fn with_x_a(self, x_a: Real) -> Self {
        Self { x_a, ..self }
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffusivityResult {
    /// Predicted mutual diffusivity [cm²/s]
    pub d_ab: Real,
    /// |D_AB - D_exp| / D_exp * 100 [%]
    pub relative_error_percent: Real,
}

impl DiffusivityResult {
    pub fn is_finite(&self) -> bool {
        self.d_ab.is_finite() && self.relative_error_percent.is_finite()
    }
}
