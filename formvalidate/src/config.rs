//! Controller configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which element receives the valid/invalid classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Targeting {
    /// Classes go on the control itself (radio/checkbox clusters use their container).
    Field,
    /// Classes go on the enclosing field group.
    #[default]
    Group,
}

/// Immutable configuration for a [`FormValidate`](crate::FormValidate).
///
/// Deserializes from the option names used by page scripts:
///
/// ```json
/// { "inputGroupClass": "form-group", "validClass": "ok", "invalidClass": "ko", "msgClass": "msg" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Class marking a field group.
    pub input_group_class: String,
    pub valid_class: String,
    pub invalid_class: String,
    /// Class of the inline error message node.
    pub msg_class: String,
    pub targeting: Targeting,
    /// Reject values with leading or trailing whitespace under the default rule.
    pub strict_whitespace: bool,
    /// Classify pre-filled or pre-checked required controls on `init`.
    pub prescan: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_group_class: "form-group".to_string(),
            valid_class: "valid-field".to_string(),
            invalid_class: "invalid-field".to_string(),
            msg_class: "error-msg-field".to_string(),
            targeting: Targeting::Group,
            strict_whitespace: true,
            prescan: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults of the older field-level flavour: `valid`, `invalid`, `input-msg`.
    pub fn legacy() -> Self {
        Self {
            valid_class: "valid".to_string(),
            invalid_class: "invalid".to_string(),
            msg_class: "input-msg".to_string(),
            targeting: Targeting::Field,
            strict_whitespace: false,
            ..Default::default()
        }
    }

    pub fn input_group_class(mut self, class: impl Into<String>) -> Self {
        self.input_group_class = class.into();
        self
    }

    pub fn valid_class(mut self, class: impl Into<String>) -> Self {
        self.valid_class = class.into();
        self
    }

    pub fn invalid_class(mut self, class: impl Into<String>) -> Self {
        self.invalid_class = class.into();
        self
    }

    pub fn msg_class(mut self, class: impl Into<String>) -> Self {
        self.msg_class = class.into();
        self
    }

    pub fn targeting(mut self, targeting: Targeting) -> Self {
        self.targeting = targeting;
        self
    }

    pub fn strict_whitespace(mut self, strict: bool) -> Self {
        self.strict_whitespace = strict;
        self
    }

    pub fn prescan(mut self, prescan: bool) -> Self {
        self.prescan = prescan;
        self
    }

    /// Check that every class name is usable.
    ///
    /// The valid and invalid classes must differ, otherwise the two states
    /// could not be told apart.
    pub fn validate(&self) -> Result<()> {
        let classes = [
            ("inputGroupClass", &self.input_group_class),
            ("validClass", &self.valid_class),
            ("invalidClass", &self.invalid_class),
            ("msgClass", &self.msg_class),
        ];
        for (field, class) in classes {
            if class.trim().is_empty() {
                return Err(Error::invalid_config(field, "must not be empty"));
            }
            if class.chars().any(char::is_whitespace) {
                return Err(Error::invalid_config(field, "must be a single class name"));
            }
        }
        if self.valid_class == self.invalid_class {
            return Err(Error::invalid_config(
                "invalidClass",
                "must differ from validClass",
            ));
        }
        Ok(())
    }
}
