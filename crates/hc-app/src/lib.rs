//! Shared application service layer for the diffusivity calculator.
//!
//! Sits between front ends (the CLI) and the model: parses and validates
//! user input, evaluates the correlation, rejects non-finite results, runs
//! case-file batches and mole-fraction sweeps, and formats results.

pub mod calc_service;
pub mod case_service;
pub mod error;
pub mod report;
pub mod sweep_service;

// Re-export key types for convenience
pub use calc_service::{Evaluation, evaluate_inputs, evaluate_raw, evaluate_with};
pub use case_service::{BatchSummary, CaseRun, run_case_file, run_cases};
pub use error::{AppError, AppResult};
pub use report::{format_breakdown, format_result, format_scientific};
pub use sweep_service::{MAX_SWEEP_POINTS, SweepDefinition, SweepPoint, SweepResult, run_sweep};
