//! Text-to-number parsing for user-entered values.
//!
//! Accepts `.` or `,` as the decimal separator on every field, so `0.25` and
//! `0,25` read the same. Thousands separators are not supported: text holding
//! more than one comma, or a comma next to a dot, is rejected as ambiguous.

use crate::field::InputField;
use hc_core::Real;
use thiserror::Error;

/// Raw text could not be turned into a usable number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("{field}: no value entered")]
    Empty { field: InputField },

    #[error("{field}: '{text}' is not a number")]
    NotANumber { field: InputField, text: String },

    #[error("{field}: '{text}' is not a finite number")]
    NonFinite { field: InputField, text: String },

    #[error("{field}: '{text}' has an ambiguous decimal separator")]
    AmbiguousSeparator { field: InputField, text: String },

    #[error("{field}: value is missing")]
    MissingField { field: InputField },

    #[error("unknown input field '{key}'")]
    UnknownField { key: String },
}

impl ParseError {
    /// Field the error refers to, if it names a known one.
    pub fn field(&self) -> Option<InputField> {
        match self {
            Self::Empty { field }
            | Self::NotANumber { field, .. }
            | Self::NonFinite { field, .. }
            | Self::AmbiguousSeparator { field, .. }
            | Self::MissingField { field } => Some(*field),
            Self::UnknownField { .. } => None,
        }
    }
}

/// Parse one field's text into a finite real.
pub fn parse_real(raw_text: &str, field: InputField) -> Result<Real, ParseError> {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty { field });
    }

    let normalized = normalize_decimal_separator(trimmed).ok_or_else(|| {
        ParseError::AmbiguousSeparator {
            field,
            text: trimmed.to_string(),
        }
    })?;

    let value: Real = normalized.parse().map_err(|_| ParseError::NotANumber {
        field,
        text: trimmed.to_string(),
    })?;

    // Rust's float parser accepts "inf" and "NaN"; neither is a usable input.
    if !value.is_finite() {
        return Err(ParseError::NonFinite {
            field,
            text: trimmed.to_string(),
        });
    }

    Ok(value)
}

/// Replace a lone decimal comma with a dot. `None` when the separator is ambiguous.
fn normalize_decimal_separator(text: &str) -> Option<String> {
    match text.matches(',').count() {
        0 => Some(text.to_string()),
        1 if !text.contains('.') => Some(text.replace(',', ".")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: InputField = InputField::MoleFractionA;

    #[test]
    fn dot_and_comma_agree() {
        assert_eq!(parse_real("0.25", X).unwrap(), 0.25);
        assert_eq!(parse_real("0,25", X).unwrap(), 0.25);
        assert_eq!(
            parse_real("2,1e-5", InputField::DiffusivityAB0).unwrap(),
            parse_real("2.1e-5", InputField::DiffusivityAB0).unwrap()
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_real("  313 \t", InputField::Temperature).unwrap(), 313.0);
    }

    #[test]
    fn signed_and_exponent_forms() {
        assert_eq!(parse_real("-10.7575", InputField::InteractionAB).unwrap(), -10.7575);
        assert_eq!(parse_real("+1.4", InputField::SurfaceAreaB).unwrap(), 1.4);
        assert_eq!(parse_real("1.33E-5", InputField::ExperimentalDiffusivity).unwrap(), 1.33e-5);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(parse_real("   ", X), Err(ParseError::Empty { field: X }));
    }

    #[test]
    fn rejects_text() {
        let err = parse_real("abc", X).unwrap_err();
        assert!(matches!(err, ParseError::NotANumber { .. }));
        assert!(err.to_string().contains("x_A"));
        assert!(matches!(parse_real("0.25 K", X), Err(ParseError::NotANumber { .. })));
    }

    #[test]
    fn rejects_non_finite_literals() {
        for text in ["inf", "-infinity", "NaN"] {
            assert!(matches!(parse_real(text, X), Err(ParseError::NonFinite { .. })));
        }
    }

    #[test]
    fn rejects_ambiguous_separators() {
        for text in ["1,000.5", "1,2,3", "0.2,5"] {
            assert!(matches!(
                parse_real(text, X),
                Err(ParseError::AmbiguousSeparator { .. })
            ));
        }
    }

    #[test]
    fn error_reports_field() {
        let err = parse_real("x", InputField::Temperature).unwrap_err();
        assert_eq!(err.field(), Some(InputField::Temperature));
        let unknown = ParseError::UnknownField { key: "p".into() };
        assert_eq!(unknown.field(), None);
    }
}
