//! Diffusivity model trait.

use crate::hsu_chen::HsuChenTerms;
use crate::inputs::{DiffusivityInputs, DiffusivityResult};

/// A closed-form binary diffusivity correlation.
///
/// Implementations must be stateless and thread-safe (Send + Sync) so batch
/// runs can evaluate points in parallel. `evaluate` never fails: out-of-domain
/// inputs produce non-finite values that the caller is expected to detect.
pub trait DiffusivityModel: Send + Sync {
    /// Short model name for logs and reports.
    fn name(&self) -> &'static str;

    /// Intermediate terms of the correlation (ln D_AB split into its parts).
    fn evaluate_terms(&self, inputs: &DiffusivityInputs) -> HsuChenTerms;

    /// Predicted D_AB and its deviation from the experimental value.
    fn evaluate(&self, inputs: &DiffusivityInputs) -> DiffusivityResult {
        let terms = self.evaluate_terms(inputs);
        terms.result(inputs.d_exp)
    }
}
