//! hc-core: shared foundation for the Hsu–Chen diffusivity workspace.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

pub use error::{HcError, HcResult};
pub use numeric::*;
