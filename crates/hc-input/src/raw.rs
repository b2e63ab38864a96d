//! Unparsed user input: one text value per field.

use crate::field::InputField;
use crate::parse::{ParseError, parse_real};
use hc_model::DiffusivityInputs;
use std::collections::BTreeMap;

/// Field texts exactly as the user entered them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInputs {
    values: BTreeMap<InputField, String>,
}

impl RawInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field pre-filled with its reference-scenario text.
    pub fn reference() -> Self {
        let mut raw = Self::new();
        for field in InputField::ALL {
            raw.set(field, field.default_text());
        }
        raw
    }

    /// Build from `(key, text)` pairs, e.g. submitted form data.
    ///
    /// Unknown keys are rejected. Later pairs overwrite earlier ones.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self, ParseError>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut raw = Self::new();
        for (key, text) in pairs {
            let field = InputField::from_key(key.as_ref()).ok_or_else(|| {
                ParseError::UnknownField {
                    key: key.as_ref().to_string(),
                }
            })?;
            raw.set(field, text);
        }
        Ok(raw)
    }

    pub fn set(&mut self, field: InputField, text: impl Into<String>) {
        self.values.insert(field, text.into());
    }

    pub fn get(&self, field: InputField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Parse all eleven fields, stopping at the first failure in form order.
    pub fn parse(&self) -> Result<DiffusivityInputs, ParseError> {
        let mut inputs = DiffusivityInputs {
            x_a: 0.0,
            d_ab0: 0.0,
            d_ba0: 0.0,
            q_a: 0.0,
            q_b: 0.0,
            r_a: 0.0,
            r_b: 0.0,
            a_ab: 0.0,
            a_ba: 0.0,
            t: 0.0,
            d_exp: 0.0,
        };
        for field in InputField::ALL {
            let text = self
                .get(field)
                .ok_or(ParseError::MissingField { field })?;
            field.set(&mut inputs, parse_real(text, field)?);
        }
        Ok(inputs)
    }
}
