//! Case file schema definitions.

use hc_model::DiffusivityInputs;
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// A named collection of input sets evaluated together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub cases: Vec<CaseDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub inputs: DiffusivityInputs,
}

impl CaseFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            cases: Vec::new(),
        }
    }

    pub fn case(&self, id: &str) -> Option<&CaseDef> {
        self.cases.iter().find(|c| c.id == id)
    }
}

/// Numeric form of the reference scenario pre-filled in the input form.
pub fn reference_inputs() -> DiffusivityInputs {
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

pub fn reference_case() -> CaseDef {
    CaseDef {
        id: "reference".to_string(),
        name: "Reference scenario".to_string(),
        description: Some("x_A = 0.25 at 313 K, D_exp = 1.33e-5 cm²/s".to_string()),
        inputs: reference_inputs(),
    }
}
