//! UNIFAC-style derived quantities of a binary mixture.
//!
//! Everything here is recomputed from `DiffusivityInputs` on each call;
//! nothing is cached between evaluations.

use crate::inputs::DiffusivityInputs;
use hc_core::Real;

/// Self-interaction factor. Unity by convention of the correlation.
pub const TAU_SELF: Real = 1.0;

/// Temperature-dependent interaction factors τ_ij = exp(-a_ij / T).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionFactors {
    pub tau_ab: Real,
    pub tau_ba: Real,
    pub tau_aa: Real,
    pub tau_bb: Real,
}

impl InteractionFactors {
    pub fn from_inputs(inputs: &DiffusivityInputs) -> Self {
        Self {
            tau_ab: (-inputs.a_ab / inputs.t).exp(),
            tau_ba: (-inputs.a_ba / inputs.t).exp(),
            tau_aa: TAU_SELF,
            tau_bb: TAU_SELF,
        }
    }
}

/// Mole, volume and surface-area fractions of the mixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureFractions {
    pub x_a: Real,
    pub x_b: Real,
    pub tau: InteractionFactors,
    /// λ_A = r_A^(1/3)
    pub lambda_a: Real,
    /// λ_B = r_B^(1/3)
    pub lambda_b: Real,
    pub phi_a: Real,
    pub phi_b: Real,
    pub theta_a: Real,
    pub theta_b: Real,
    pub theta_ab: Real,
    pub theta_ba: Real,
    pub theta_aa: Real,
    pub theta_bb: Real,
}

impl MixtureFractions {
    pub fn from_inputs(inputs: &DiffusivityInputs) -> Self {
        let x_a = inputs.x_a;
        let x_b = inputs.x_b();
        let tau = InteractionFactors::from_inputs(inputs);

        // powf(1/3) rather than cbrt: negative r must stay NaN
        let lambda_a = inputs.r_a.powf(1.0 / 3.0);
        let lambda_b = inputs.r_b.powf(1.0 / 3.0);

        let phi_den = x_a * lambda_a + x_b * lambda_b;
        let phi_a = x_a * lambda_a / phi_den;
        let phi_b = x_b * lambda_b / phi_den;

        let theta_den = x_a * inputs.q_a + x_b * inputs.q_b;
        let theta_a = x_a * inputs.q_a / theta_den;
        let theta_b = x_b * inputs.q_b / theta_den;

        // Two shared denominators; the four cross fractions need not pair to 1.
        let den_a = theta_a * tau.tau_aa + theta_b * tau.tau_ba;
        let den_b = theta_a * tau.tau_ab + theta_b * tau.tau_bb;

        Self {
            x_a,
            x_b,
            tau,
            lambda_a,
            lambda_b,
            phi_a,
            phi_b,
            theta_a,
            theta_b,
            theta_ba: theta_b * tau.tau_ba / den_a,
            theta_ab: theta_a * tau.tau_ab / den_b,
            theta_aa: theta_a * tau.tau_aa / den_a,
            theta_bb: theta_b * tau.tau_bb / den_b,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use hc_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn volume_and_area_fractions_sum_to_one(
            x_a in 1e-6_f64..(1.0 - 1e-6),
            q_a in 0.1_f64..10.0,
            q_b in 0.1_f64..10.0,
            r_a in 0.1_f64..10.0,
            r_b in 0.1_f64..10.0,
            a_ab in -500.0_f64..500.0,
            a_ba in -500.0_f64..500.0,
            t in 200.0_f64..600.0,
        ) {
            let inputs = DiffusivityInputs {
                x_a,
                d_ab0: 1e-5,
                d_ba0: 1e-5,
                q_a,
                q_b,
                r_a,
                r_b,
                a_ab,
                a_ba,
                t,
                d_exp: 1e-5,
            };
            let f = MixtureFractions::from_inputs(&inputs);
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            prop_assert!(nearly_equal(f.phi_a + f.phi_b, 1.0, tol));
            prop_assert!(nearly_equal(f.theta_a + f.theta_b, 1.0, tol));
        }
    }
}
