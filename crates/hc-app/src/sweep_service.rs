//! Mole-fraction sweeps.
//!
//! Evaluates the correlation across linearly spaced x_A values with the other
//! ten inputs held fixed. Used to tabulate D_AB(x_A) curves.

use hc_core::{Real, ensure_finite, ensure_open_interval};
use hc_input::validate_inputs;
use hc_model::{DiffusivityInputs, DiffusivityModel, HsuChen};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt::{self, Write};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Upper bound on sweep resolution.
pub const MAX_SWEEP_POINTS: usize = 100_000;

/// Linear sweep of the solute mole fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepDefinition {
    pub start: Real,
    pub end: Real,
    pub num_points: usize,
}

impl SweepDefinition {
    /// Both bounds must lie strictly inside (0, 1) and differ; 2 to
    /// `MAX_SWEEP_POINTS` points.
    pub fn new(start: Real, end: Real, num_points: usize) -> AppResult<Self> {
        for bound in [start, end] {
            ensure_open_interval(bound, 0.0, 1.0, "sweep bound")
                .map_err(|_| AppError::InvalidSweep(format!("bound {bound} is not inside (0, 1)")))?;
        }
        if num_points < 2 {
            return Err(AppError::InvalidSweep(
                "sweep must have at least 2 points".to_string(),
            ));
        }
        if num_points > MAX_SWEEP_POINTS {
            return Err(AppError::InvalidSweep(format!(
                "sweep must have at most {MAX_SWEEP_POINTS} points"
            )));
        }
        if (start - end).abs() < 1e-12 {
            return Err(AppError::InvalidSweep(
                "start and end values must be different".to_string(),
            ));
        }
        Ok(Self {
            start,
            end,
            num_points,
        })
    }

    pub fn generate_points(&self) -> Vec<Real> {
        let delta = (self.end - self.start) / (self.num_points - 1) as Real;
        let mut points: Vec<Real> = (0..self.num_points)
            .map(|i| self.start + i as Real * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep x_A from {} to {} ({} points)",
            self.start, self.end, self.num_points
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub x_a: Real,
    pub d_ab: Real,
    pub relative_error_percent: Real,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    /// CSV table with a header row.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("x_A,D_AB_cm2_per_s,relative_error_percent\n");
        for p in &self.points {
            // Writing to a String cannot fail
            let _ = writeln!(out, "{},{:e},{}", p.x_a, p.d_ab, p.relative_error_percent);
        }
        out
    }
}

/// Evaluate `base` at every x_A of the sweep, in parallel.
///
/// The x_A of `base` is ignored. The other ten inputs are validated once at
/// the sweep start; every sweep point is then inside the domain by construction.
pub fn run_sweep(base: &DiffusivityInputs, sweep: &SweepDefinition) -> AppResult<SweepResult> {
    validate_inputs(&base.with_x_a(sweep.start))?;

    let points = sweep
        .generate_points()
        .into_par_iter()
        .map(|x_a| -> AppResult<SweepPoint> {
            let result = HsuChen.evaluate(&base.with_x_a(x_a));
            Ok(SweepPoint {
                x_a,
                d_ab: ensure_finite(result.d_ab, "D_AB")?,
                relative_error_percent: ensure_finite(
                    result.relative_error_percent,
                    "relative error",
                )?,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    info!(%sweep, "sweep evaluated");
    Ok(SweepResult { points })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn points_stay_inside_bounds(
            start in 0.001_f64..0.999,
            end in 0.001_f64..0.999,
            num_points in 2_usize..200,
        ) {
            prop_assume!((start - end).abs() > 1e-9);
            let sweep = SweepDefinition::new(start, end, num_points).unwrap();
            let points = sweep.generate_points();
            let (lo, hi) = (start.min(end), start.max(end));

            prop_assert_eq!(points.len(), num_points);
            prop_assert_eq!(points[0], start);
            prop_assert_eq!(points[num_points - 1], end);
            prop_assert!(points.iter().all(|&x| x > 0.0 && x < 1.0 && x >= lo - 1e-12 && x <= hi + 1e-12));
        }
    }
}
