use crate::element::Element;
use crate::types::InputType;

/// The element holding keyboard focus, if any.
#[derive(Debug, Default, Clone)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Move focus to `id`. Returns the element that lost it.
    pub fn set(&mut self, id: &str) -> Option<String> {
        self.focused.replace(id.to_string())
    }

    /// Drop focus. Returns the element that lost it.
    pub fn clear(&mut self) -> Option<String> {
        self.focused.take()
    }
}

/// Whether a browser would let `element` take focus.
pub fn can_focus(element: &Element) -> bool {
    element.focusable && !element.disabled && element.input_type() != Some(InputType::Hidden)
}
