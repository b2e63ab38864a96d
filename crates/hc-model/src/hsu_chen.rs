//! The Hsu–Chen correlation.
//!
//! ln D_AB = term1 + term2, where term1 interpolates the infinite-dilution
//! diffusivities and corrects for molecular size (λ, φ), and term2 is the
//! UNIFAC residual contribution built from the local area fractions (θ, τ).

use crate::fractions::MixtureFractions;
use crate::inputs::{DiffusivityInputs, DiffusivityResult};
use crate::model::DiffusivityModel;
use hc_core::Real;

/// Intermediate results of one Hsu–Chen evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsuChenTerms {
    pub fractions: MixtureFractions,
    /// Dilution interpolation plus size correction
    pub term1: Real,
    /// Residual (interaction) contribution
    pub term2: Real,
}

impl HsuChenTerms {
    pub fn ln_d_ab(&self) -> Real {
        self.term1 + self.term2
    }

    pub fn d_ab(&self) -> Real {
        self.ln_d_ab().exp()
    }

    pub fn result(&self, d_exp: Real) -> DiffusivityResult {
        let d_ab = self.d_ab();
        DiffusivityResult {
            d_ab,
            relative_error_percent: relative_error_percent(d_ab, d_exp),
        }
    }
}

/// Hsu–Chen binary liquid diffusivity model.
#[derive(Debug, Clone, Copy, Default)]
pub struct HsuChen;

impl DiffusivityModel for HsuChen {
    fn name(&self) -> &'static str {
        "hsu-chen"
    }

    fn evaluate_terms(&self, inputs: &DiffusivityInputs) -> HsuChenTerms {
        let f = MixtureFractions::from_inputs(inputs);
        HsuChenTerms {
            fractions: f,
            term1: size_term(inputs, &f),
            term2: residual_term(inputs, &f),
        }
    }
}

/// Evaluate the Hsu–Chen correlation.
pub fn evaluate(inputs: &DiffusivityInputs) -> DiffusivityResult {
    HsuChen.evaluate(inputs)
}

/// |D_AB - D_exp| / D_exp * 100. Infinite or NaN when `d_exp` is zero.
pub fn relative_error_percent(d_ab: Real, d_exp: Real) -> Real {
    (d_ab - d_exp).abs() / d_exp * 100.0
}

fn size_term(inputs: &DiffusivityInputs, f: &MixtureFractions) -> Real {
    let (x_a, x_b) = (f.x_a, f.x_b);

    let dilution = x_b * inputs.d_ab0.ln() + x_a * inputs.d_ba0.ln();
    let combinatorial = 2.0 * (x_a * (x_a / f.phi_a).ln() + x_b * (x_b / f.phi_b).ln());
    let size_ratio = 2.0
        * x_a
        * x_b
        * ((f.phi_a / x_a) * (1.0 - f.lambda_a / f.lambda_b)
            + (f.phi_b / x_b) * (1.0 - f.lambda_b / f.lambda_a));

    dilution + combinatorial + size_ratio
}

fn residual_term(inputs: &DiffusivityInputs, f: &MixtureFractions) -> Real {
    let tau = f.tau;
    let ln_tau_ab = tau.tau_ab.ln();
    let ln_tau_ba = tau.tau_ba.ln();

    let solute_side = (f.x_b * inputs.q_a)
        * ((1.0 - f.theta_ba.powi(2)) * ln_tau_ba
            + (1.0 - f.theta_bb.powi(2)) * tau.tau_ab * ln_tau_ab);
    let solvent_side = (f.x_a * inputs.q_b)
        * ((1.0 - f.theta_ab.powi(2)) * ln_tau_ab
            + (1.0 - f.theta_aa.powi(2)) * tau.tau_ba * ln_tau_ba);

    solute_side + solvent_side
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_core::{Tolerances, nearly_equal};

    fn reference() -> DiffusivityInputs {
        DiffusivityInputs {
            x_a: 0.25,
            d_ab0: 2.1e-5,
            d_ba0: 2.67e-5,
            q_a: 1.432,
            q_b: 1.4,
            r_a: 1.4311,
            r_b: 0.92,
            a_ab: -10.7575,
            a_ba: 194.5302,
            t: 313.0,
            d_exp: 1.33e-5,
        }
    }

    #[test]
    fn reference_terms() {
        let terms = HsuChen.evaluate_terms(&reference());
        let tol = Tolerances::default();
        assert!(nearly_equal(terms.term1, -10.723705877834139, tol));
        assert!(nearly_equal(terms.term2, -0.4884080915183254, tol));
    }

    #[test]
    fn reference_result() {
        let result = evaluate(&reference());
        let tol = Tolerances::default();
        assert!(nearly_equal(result.d_ab, 1.3509546566611805e-5, tol));
        assert!(nearly_equal(result.relative_error_percent, 1.5755380948256026, tol));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let a = evaluate(&reference());
        let b = evaluate(&reference());
        assert_eq!(a.d_ab.to_bits(), b.d_ab.to_bits());
        assert_eq!(
            a.relative_error_percent.to_bits(),
            b.relative_error_percent.to_bits()
        );
    }

    #[test]
    fn relative_error_ignores_sign_of_deviation() {
        assert!(nearly_equal(relative_error_percent(1.1, 1.0), 10.0, Tolerances::default()));
        assert!(nearly_equal(relative_error_percent(0.9, 1.0), 10.0, Tolerances::default()));
        assert_eq!(relative_error_percent(1.0, 1.0), 0.0);
    }

    #[test]
    fn equal_sizes_and_no_interaction_interpolate_logarithmically() {
        // λ_A = λ_B and τ = 1: size and residual corrections vanish
        let inputs = DiffusivityInputs {
            r_a: 1.0,
            r_b: 1.0,
            a_ab: 0.0,
            a_ba: 0.0,
            ..reference()
        };
        let terms = HsuChen.evaluate_terms(&inputs);
        let expected = 0.75 * 2.1e-5_f64.ln() + 0.25 * 2.67e-5_f64.ln();
        assert!(nearly_equal(terms.term1, expected, Tolerances::default()));
        assert_eq!(terms.term2, 0.0);
    }

    #[test]
    fn out_of_domain_inputs_produce_non_finite_output() {
        for inputs in [
            reference().with_x_a(0.0),
            reference().with_x_a(1.0),
            DiffusivityInputs {
                d_exp: 0.0,
                ..reference()
            },
            DiffusivityInputs {
                d_ab0: -1.0e-5,
                ..reference()
            },
            DiffusivityInputs {
                r_b: -0.92,
                ..reference()
            },
        ] {
            assert!(!evaluate(&inputs).is_finite(), "{inputs:?}");
        }
    }

    #[test]
    fn model_name() {
        assert_eq!(HsuChen.name(), "hsu-chen");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn relative_error_is_never_negative(
            x_a in 0.01_f64..0.99,
            d_ab0 in 1e-6_f64..1e-4,
            d_ba0 in 1e-6_f64..1e-4,
            a_ab in -300.0_f64..300.0,
            a_ba in -300.0_f64..300.0,
            d_exp in 1e-6_f64..1e-4,
        ) {
            let inputs = DiffusivityInputs {
                x_a,
                d_ab0,
                d_ba0,
                q_a: 1.432,
                q_b: 1.4,
                r_a: 1.4311,
                r_b: 0.92,
                a_ab,
                a_ba,
                t: 313.0,
                d_exp,
            };
            let result = evaluate(&inputs);
            prop_assert!(result.d_ab > 0.0);
            prop_assert!(result.relative_error_percent >= 0.0);
        }
    }
}
