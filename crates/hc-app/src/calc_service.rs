//! Single evaluation: raw text → validated inputs → model → checked result.

use hc_core::{Real, ensure_finite};
use hc_input::{RawInputs, validate_inputs};
use hc_model::{DiffusivityInputs, DiffusivityModel, DiffusivityResult, HsuChen};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::AppResult;

/// A finite, displayable evaluation together with its intermediate terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub model: &'static str,
    pub inputs: DiffusivityInputs,
    pub result: DiffusivityResult,
    pub term1: Real,
    pub term2: Real,
    pub ln_d_ab: Real,
}

/// Parse, validate and evaluate user-entered text.
///
/// Parse failures never reach the model.
pub fn evaluate_raw(raw: &RawInputs) -> AppResult<Evaluation> {
    let inputs = raw.parse().inspect_err(|err| {
        warn!(error = %err, "rejected unparseable input");
    })?;
    evaluate_inputs(&inputs)
}

/// Validate and evaluate already-parsed inputs with the Hsu–Chen model.
pub fn evaluate_inputs(inputs: &DiffusivityInputs) -> AppResult<Evaluation> {
    evaluate_with(&HsuChen, inputs)
}

/// Validate and evaluate with an arbitrary model.
pub fn evaluate_with(
    model: &dyn DiffusivityModel,
    inputs: &DiffusivityInputs,
) -> AppResult<Evaluation> {
    validate_inputs(inputs).inspect_err(|err| {
        warn!(error = %err, "rejected out-of-range input");
    })?;

    let terms = model.evaluate_terms(inputs);
    let f = &terms.fractions;
    debug!(
        model = model.name(),
        tau_ab = f.tau.tau_ab,
        tau_ba = f.tau.tau_ba,
        phi_a = f.phi_a,
        theta_a = f.theta_a,
        term1 = terms.term1,
        term2 = terms.term2,
        "evaluated correlation terms"
    );

    let result = terms.result(inputs.d_exp);
    ensure_finite(result.d_ab, "D_AB")?;
    ensure_finite(result.relative_error_percent, "relative error")?;

    info!(
        x_a = inputs.x_a,
        d_ab = result.d_ab,
        error_pct = result.relative_error_percent,
        "diffusivity evaluated"
    );

    Ok(Evaluation {
        model: model.name(),
        inputs: *inputs,
        result,
        term1: terms.term1,
        term2: terms.term2,
        ln_d_ab: terms.ln_d_ab(),
    })
}
