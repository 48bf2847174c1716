//! Error types

/// Errors raised while building or mutating a form tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The fixture was not valid JSON or did not match the expected shape.
    #[error("Invalid form fixture: {0}")]
    Fixture(#[from] serde_json::Error),

    /// No element with this ID exists in the tree.
    #[error("Element '{id}' not found")]
    NotFound { id: String },

    /// The element exists but is not a form control.
    #[error("Element '{id}' is a {tag}, not a form control")]
    NotAControl { id: String, tag: String },

    /// An event name that the tree does not dispatch.
    #[error("Unknown event type '{name}'")]
    UnknownEvent { name: String },
}

impl Error {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn not_a_control(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::NotAControl {
            id: id.into(),
            tag: tag.into(),
        }
    }

    pub fn unknown_event(name: impl Into<String>) -> Self {
        Self::UnknownEvent { name: name.into() }
    }
}
