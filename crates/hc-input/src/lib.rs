//! hc-input: caller-side boundary of the diffusivity model.
//!
//! Turns user text into validated `DiffusivityInputs`:
//! - field catalog (form keys, labels, units, reference defaults)
//! - number parsing with `.` or `,` decimal separators
//! - physical-domain validation
//! - YAML/JSON case files holding named input sets

pub mod field;
pub mod parse;
pub mod raw;
pub mod schema;
pub mod validate;

pub use field::InputField;
pub use parse::{ParseError, parse_real};
pub use raw::RawInputs;
pub use schema::*;
pub use validate::{DomainError, validate_inputs};

use std::collections::HashSet;
use std::path::Path;

pub type CaseResult<T> = Result<T, CaseError>;

#[derive(thiserror::Error, Debug)]
pub enum CaseError {
    #[error("Case '{id}': {source}")]
    Domain {
        id: String,
        #[source]
        source: DomainError,
    },

    #[error("Duplicate case ID: {id}")]
    DuplicateId { id: String },

    #[error("Unsupported case file version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Unsupported case file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Check version, case ID uniqueness and the physical domain of every case.
pub fn validate_case_file(file: &CaseFile) -> CaseResult<()> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(CaseError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut ids = HashSet::new();
    for case in &file.cases {
        if !ids.insert(case.id.as_str()) {
            return Err(CaseError::DuplicateId {
                id: case.id.clone(),
            });
        }
        validate_inputs(&case.inputs).map_err(|source| CaseError::Domain {
            id: case.id.clone(),
            source,
        })?;
    }
    Ok(())
}

pub fn load_yaml(path: &Path) -> CaseResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let file: CaseFile = serde_yaml::from_str(&content)?;
    validate_case_file(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &Path, file: &CaseFile) -> CaseResult<()> {
    validate_case_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> CaseResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let file: CaseFile = serde_json::from_str(&content)?;
    validate_case_file(&file)?;
    Ok(file)
}

pub fn save_json(path: &Path, file: &CaseFile) -> CaseResult<()> {
    validate_case_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a case file, picking the format from the extension.
pub fn load_case_file(path: &Path) -> CaseResult<CaseFile> {
    match CaseFormat::from_path(path)? {
        CaseFormat::Yaml => load_yaml(path),
        CaseFormat::Json => load_json(path),
    }
}

/// Save a case file, picking the format from the extension.
pub fn save_case_file(path: &Path, file: &CaseFile) -> CaseResult<()> {
    match CaseFormat::from_path(path)? {
        CaseFormat::Yaml => save_yaml(path, file),
        CaseFormat::Json => save_json(path, file),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseFormat {
    Yaml,
    Json,
}

impl CaseFormat {
    fn from_path(path: &Path) -> CaseResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(CaseError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}
