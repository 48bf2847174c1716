//! Form validation engine
//!
//! Classifies required fields as valid or invalid while the user edits them,
//! renders inline error messages, and blocks submission until every required
//! field is satisfied.

pub mod aggregate;
pub mod apply;
pub mod classify;
pub mod config;
pub mod error;
pub mod host;
pub mod result;
pub mod rules;

mod controller;

pub use aggregate::{FieldValue, FormValues, RequiredUnit};
pub use classify::Classification;
pub use config::{Config, Targeting};
pub use controller::{FieldState, FormValidate, Outcome};
pub use error::{Error, Result};
pub use host::{Control, ControlKind, FormHost};
pub use result::{FieldError, ValidationResult};
pub use rules::{cpf_is_valid, Builtin, Pattern, Rule};

pub mod prelude {
    pub use crate::config::{Config, Targeting};
    pub use crate::controller::{FieldState, FormValidate, Outcome};
    pub use crate::host::FormHost;
    pub use crate::result::{FieldError, ValidationResult};
    pub use formdom::{Element, Event, EventKind, Form};
}
