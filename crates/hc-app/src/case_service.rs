//! Batch evaluation of case files.

use hc_input::{CaseDef, CaseFile, load_case_file};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use crate::calc_service::{Evaluation, evaluate_inputs};
use crate::error::AppResult;

/// Outcome of one case in a batch. Exactly one of `evaluation`/`error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct CaseRun {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate statistics over a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub mean_error_percent: Option<f64>,
    pub max_error_percent: Option<f64>,
}

impl BatchSummary {
    pub fn from_runs(runs: &[CaseRun]) -> Self {
        let errors: Vec<f64> = runs
            .iter()
            .filter_map(|r| r.evaluation.map(|e| e.result.relative_error_percent))
            .collect();
        let succeeded = errors.len();

        Self {
            total: runs.len(),
            succeeded,
            failed: runs.len() - succeeded,
            mean_error_percent: (succeeded > 0)
                .then(|| errors.iter().sum::<f64>() / succeeded as f64),
            max_error_percent: errors.iter().copied().reduce(f64::max),
        }
    }
}

/// Evaluate every case in parallel, keeping file order in the output.
///
/// A failing case does not stop the batch; its error is recorded instead.
pub fn run_cases(cases: &[CaseDef]) -> Vec<CaseRun> {
    cases
        .par_iter()
        .map(|case| match evaluate_inputs(&case.inputs) {
            Ok(evaluation) => CaseRun {
                id: case.id.clone(),
                name: case.name.clone(),
                evaluation: Some(evaluation),
                error: None,
            },
            Err(err) => {
                warn!(case = %case.id, error = %err, "case failed");
                CaseRun {
                    id: case.id.clone(),
                    name: case.name.clone(),
                    evaluation: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect()
}

/// Load a YAML/JSON case file and evaluate all of its cases.
pub fn run_case_file(path: &Path) -> AppResult<(CaseFile, Vec<CaseRun>)> {
    let file = load_case_file(path)?;
    let runs = run_cases(&file.cases);
    let summary = BatchSummary::from_runs(&runs);
    info!(
        file = %path.display(),
        total = summary.total,
        failed = summary.failed,
        "case file evaluated"
    );
    Ok((file, runs))
}
