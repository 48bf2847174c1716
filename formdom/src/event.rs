use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// DOM event types a form tree dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Keyup,
    Input,
    Change,
    Focus,
    Blur,
    Submit,
    Reset,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyup => "keyup",
            Self::Input => "input",
            Self::Change => "change",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }

    /// Events fired by a field while the user edits it.
    pub fn is_field_event(&self) -> bool {
        matches!(self, Self::Keyup | Self::Input | Self::Change | Self::Blur)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keyup" => Ok(Self::Keyup),
            "input" => Ok(Self::Input),
            "change" => Ok(Self::Change),
            "focus" => Ok(Self::Focus),
            "blur" => Ok(Self::Blur),
            "submit" => Ok(Self::Submit),
            "reset" => Ok(Self::Reset),
            other => Err(Error::unknown_event(other)),
        }
    }
}

/// An event targeted at an element of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: String,
    default_prevented: bool,
}

impl Event {
    pub fn new(kind: EventKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            default_prevented: false,
        }
    }

    pub fn keyup(target: impl Into<String>) -> Self {
        Self::new(EventKind::Keyup, target)
    }

    pub fn input(target: impl Into<String>) -> Self {
        Self::new(EventKind::Input, target)
    }

    pub fn change(target: impl Into<String>) -> Self {
        Self::new(EventKind::Change, target)
    }

    pub fn focus(target: impl Into<String>) -> Self {
        Self::new(EventKind::Focus, target)
    }

    pub fn blur(target: impl Into<String>) -> Self {
        Self::new(EventKind::Blur, target)
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self::new(EventKind::Submit, target)
    }

    pub fn reset(target: impl Into<String>) -> Self {
        Self::new(EventKind::Reset, target)
    }

    /// Cancel the native default action (e.g. the browser's form submission).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
