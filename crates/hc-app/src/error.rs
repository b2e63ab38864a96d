//! Error types for the hc-app service layer.

use hc_core::HcError;
use hc_input::{CaseError, DomainError, ParseError};

/// Application error covering every way a request can fail before a number
/// is shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ParseError),

    #[error("Input out of range: {0}")]
    Domain(#[from] DomainError),

    #[error("Computation error: {0}")]
    Computation(#[from] HcError),

    #[error("Case file error: {0}")]
    CaseFile(#[from] CaseError),

    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// One-line suggestion telling the user how to get back on track.
    pub fn hint(&self) -> &'static str {
        match self {
            AppError::InvalidInput(ParseError::UnknownField { .. }) => {
                "Run `hc-cli fields` to list the accepted field keys."
            }
            AppError::InvalidInput(_) => {
                "Please enter valid numerical values ('.' or ',' as decimal separator) and try again."
            }
            AppError::Domain(_) => {
                "Check the value against its allowed range (`hc-cli fields`) and try again."
            }
            AppError::Computation(_) => {
                "The correlation produced no finite result for these inputs; review the parameters."
            }
            AppError::CaseFile(_) => {
                "Fix the case file (see `hc-cli template` for a valid example) and run it again."
            }
            AppError::InvalidSweep(_) => {
                "Choose distinct sweep bounds strictly between 0 and 1 and at least 2 points."
            }
            AppError::Serialization(_) => "Try again without --json.",
            AppError::Io(_) => "Check the file path and permissions.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_input::InputField;

    #[test]
    fn parse_and_domain_errors_stay_distinct() {
        let parse: AppError = ParseError::Empty {
            field: InputField::Temperature,
        }
        .into();
        let domain: AppError = DomainError::OutOfRange {
            field: InputField::Temperature,
            value: -1.0,
            reason: "absolute temperature must be > 0 K",
        }
        .into();

        assert!(parse.to_string().starts_with("Invalid input"));
        assert!(domain.to_string().starts_with("Input out of range"));
        assert_ne!(parse.hint(), domain.hint());
    }

    #[test]
    fn unknown_field_hint_points_to_catalog() {
        let err: AppError = ParseError::UnknownField { key: "P".into() }.into();
        assert!(err.hint().contains("hc-cli fields"));
    }
}
