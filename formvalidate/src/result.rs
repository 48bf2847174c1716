use std::fmt;

use serde::Serialize;

/// A required unit that blocked submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// `name` of the unit's control, or the unit ID when nothing inside is named.
    pub field_name: String,
    /// The element now carrying the invalid class.
    pub target: String,
    pub message: String,
}

/// Verdict of a submit attempt.
///
/// Serializes as `{"status":"valid"}` or
/// `{"status":"invalid","errors":[...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "errors", rename_all = "lowercase")]
pub enum ValidationResult {
    #[default]
    Valid,
    /// Invalid units in document order. Never empty.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        match self {
            Self::Valid => Vec::new(),
            Self::Invalid(errors) => errors,
        }
    }

    /// The unit that received focus.
    pub fn first_invalid_target(&self) -> Option<&str> {
        self.errors().first().map(|e| e.target.as_str())
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid(errors) => {
                let names: Vec<&str> = errors.iter().map(|e| e.field_name.as_str()).collect();
                write!(f, "invalid: {}", names.join(", "))
            }
        }
    }
}
