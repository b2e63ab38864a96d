//! hc-model: Hsu–Chen binary liquid diffusivity correlation.
//!
//! Provides:
//! - `DiffusivityInputs` / `DiffusivityResult` value types
//! - `MixtureFractions`: UNIFAC-style derived fractions (τ, λ, φ, θ)
//! - `DiffusivityModel` trait and the `HsuChen` implementation
//!
//! The model is total arithmetic. It does not validate its inputs and has
//! no error channel: inputs outside the physical domain (x_A at 0 or 1,
//! non-positive base diffusivities or volume parameters, D_exp = 0) yield
//! NaN or infinite values, which callers must reject before or after
//! evaluation.
//!
//! # Example
//!
//! ```
//! use hc_model::{DiffusivityInputs, evaluate};
//!
//! let inputs = DiffusivityInputs {
//!     x_a: 0.25,
//!     d_ab0: 2.1e-5,
//!     d_ba0: 2.67e-5,
//!     q_a: 1.432,
//!     q_b: 1.4,
//!     r_a: 1.4311,
//!     r_b: 0.92,
//!     a_ab: -10.7575,
//!     a_ba: 194.5302,
//!     t: 313.0,
//!     d_exp: 1.33e-5,
//! };
//!
//! let result = evaluate(&inputs);
//! assert!(result.d_ab > 0.0);
//! assert!(result.relative_error_percent >= 0.0);
//! ```

pub mod fractions;
pub mod hsu_chen;
pub mod inputs;
pub mod model;

pub use fractions::{InteractionFactors, MixtureFractions};
pub use hsu_chen::{HsuChen, HsuChenTerms, evaluate, relative_error_percent};
pub use inputs::{DiffusivityInputs, DiffusivityResult};
pub use model::DiffusivityModel;
