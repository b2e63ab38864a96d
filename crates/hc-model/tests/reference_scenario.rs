//! Regression tests for the reference scenario.

use hc_core::{Tolerances, nearly_equal};
use hc_model::{DiffusivityInputs, DiffusivityModel, HsuChen, evaluate};

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
fn reference_scenario_baseline() {
    let result = evaluate(&reference());

    assert!(result.d_ab.is_finite() && result.d_ab > 0.0);
    assert!(result.relative_error_percent.is_finite());
    assert!(result.relative_error_percent >= 0.0);

    let tol = Tolerances::default();
    assert!(nearly_equal(result.d_ab, 1.3509546566611805e-5, tol));
    assert!(nearly_equal(result.relative_error_percent, 1.5755380948256026, tol));
}

#[test]
fn composition_dependence() {
    // Baselines at higher solute fractions
    let tol = Tolerances::default();
    let mid = evaluate(&reference().with_x_a(0.5));
    assert!(nearly_equal(mid.d_ab, 1.4295998386082675e-5, tol));
    assert!(nearly_equal(mid.relative_error_percent, 7.488709669794553, tol));

    let rich = evaluate(&reference().with_x_a(0.75));
    assert!(nearly_equal(rich.d_ab, 1.865060072894653e-5, tol));
    assert!(nearly_equal(rich.relative_error_percent, 40.2300806687709, tol));
}

#[test]
fn terms_reassemble_to_result() {
    let inputs = reference();
    let terms = HsuChen.evaluate_terms(&inputs);
    let result = HsuChen.evaluate(&inputs);
    assert_eq!(terms.d_ab(), result.d_ab);
    assert_eq!(terms.ln_d_ab(), terms.term1 + terms.term2);
}

#[test]
fn parallel_evaluations_agree() {
    let expected = evaluate(&reference());
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| evaluate(&reference())))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
