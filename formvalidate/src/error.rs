//! Error types

/// Errors raised while constructing a [`FormValidate`](crate::FormValidate).
///
/// Validation failures are not errors: a field failing its rule is an
/// ordinary state transition reported through [`ValidationResult`](crate::ValidationResult).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The bound root is missing or is not a `<form>` element.
    #[error("formSelector should a valid selector")]
    InvalidForm,

    /// A configuration value is unusable.
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl Error {
    pub fn invalid_config(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidConfig { field, reason }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
