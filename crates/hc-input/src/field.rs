//! Catalog of the eleven user-facing input fields.

use hc_model::DiffusivityInputs;
use hc_core::Real;
use std::fmt;

/// One numeric input of the correlation, in input-form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputField {
    MoleFractionA,
    DiffusivityAB0,
    DiffusivityBA0,
    VolumeA,
    VolumeB,
    ExperimentalDiffusivity,
    Temperature,
    InteractionAB,
    InteractionBA,
    SurfaceAreaA,
    SurfaceAreaB,
}

impl InputField {
    pub const ALL: [InputField; 11] = [
        Self::MoleFractionA,
        Self::DiffusivityAB0,
        Self::DiffusivityBA0,
        Self::VolumeA,
        Self::VolumeB,
        Self::ExperimentalDiffusivity,
        Self::Temperature,
        Self::InteractionAB,
        Self::InteractionBA,
        Self::SurfaceAreaA,
        Self::SurfaceAreaB,
    ];

    /// Form key used in raw input maps and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::MoleFractionA => "x_A",
            Self::DiffusivityAB0 => "D_AB0",
            Self::DiffusivityBA0 => "D_BA0",
            Self::VolumeA => "rA",
            Self::VolumeB => "rB",
            Self::ExperimentalDiffusivity => "DAB_exp",
            Self::Temperature => "T",
            Self::InteractionAB => "a_AB",
            Self::InteractionBA => "a_BA",
            Self::SurfaceAreaA => "q_A",
            Self::SurfaceAreaB => "q_B",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MoleFractionA => "Mole fraction of A",
            Self::DiffusivityAB0 => "Infinite-dilution diffusivity of A in B",
            Self::DiffusivityBA0 => "Infinite-dilution diffusivity of B in A",
            Self::VolumeA => "UNIFAC volume parameter of A",
            Self::VolumeB => "UNIFAC volume parameter of B",
            Self::ExperimentalDiffusivity => "Experimental D_AB",
            Self::Temperature => "Temperature",
            Self::InteractionAB => "Interaction parameter a_AB",
            Self::InteractionBA => "Interaction parameter a_BA",
            Self::SurfaceAreaA => "UNIFAC surface-area parameter of A",
            Self::SurfaceAreaB => "UNIFAC surface-area parameter of B",
        }
    }

    /// Unit label, empty for dimensionless fields.
    pub fn unit(self) -> &'static str {
        match self {
            Self::DiffusivityAB0 | Self::DiffusivityBA0 | Self::ExperimentalDiffusivity => "cm²/s",
            Self::Temperature | Self::InteractionAB | Self::InteractionBA => "K",
            Self::MoleFractionA
            | Self::VolumeA
            | Self::VolumeB
            | Self::SurfaceAreaA
            | Self::SurfaceAreaB => "",
        }
    }

    /// Reference-scenario text pre-filled in the input form.
    pub fn default_text(self) -> &'static str {
        match self {
            Self::MoleFractionA => "0.25",
            Self::DiffusivityAB0 => "2.1e-5",
            Self::DiffusivityBA0 => "2.67e-5",
            Self::VolumeA => "1.4311",
            Self::VolumeB => "0.92",
            Self::ExperimentalDiffusivity => "1.33e-5",
            Self::Temperature => "313",
            Self::InteractionAB => "-10.7575",
            Self::InteractionBA => "194.5302",
            Self::SurfaceAreaA => "1.432",
            Self::SurfaceAreaB => "1.4",
        }
    }

    /// Case-insensitive lookup by form key.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(key))
    }

    /// Read this field's value from parsed inputs.
    pub fn get(self, inputs: &DiffusivityInputs) -> Real {
        match self {
            Self::MoleFractionA => inputs.x_a,
            Self::DiffusivityAB0 => inputs.d_ab0,
            Self::DiffusivityBA0 => inputs.d_ba0,
            Self::VolumeA => inputs.r_a,
            Self::VolumeB => inputs.r_b,
            Self::ExperimentalDiffusivity => inputs.d_exp,
            Self::Temperature => inputs.t,
            Self::InteractionAB => inputs.a_ab,
            Self::InteractionBA => inputs.a_ba,
            Self::SurfaceAreaA => inputs.q_a,
            Self::SurfaceAreaB => inputs.q_b,
        }
    }

    /// Write this field's value into inputs.
    pub fn set(self, inputs: &mut DiffusivityInputs, value: Real) {
        let slot = match self {
            Self::MoleFractionA => &mut inputs.x_a,
            Self::DiffusivityAB0 => &mut inputs.d_ab0,
            Self::DiffusivityBA0 => &mut inputs.d_ba0,
            Self::VolumeA => &mut inputs.r_a,
            Self::VolumeB => &mut inputs.r_b,
            Self::ExperimentalDiffusivity => &mut inputs.d_exp,
            Self::Temperature => &mut inputs.t,
            Self::InteractionAB => &mut inputs.a_ab,
            Self::InteractionBA => &mut inputs.a_ba,
            Self::SurfaceAreaA => &mut inputs.q_a,
            Self::SurfaceAreaB => &mut inputs.q_b,
        };
        *slot = value;
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
