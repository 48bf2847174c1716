//! The seam between the engine and a live form.
//!
//! The engine never touches a tree directly. Everything it reads or mutates
//! goes through [`FormHost`], so the same rules run against a browser DOM
//! binding or the in-memory [`formdom::Form`].

mod dom;

/// What kind of control an element is, as far as validation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Any single-value `<input>` (text, email, tel, ...).
    Text,
    Select,
    Textarea,
    Radio,
    Checkbox,
    Submit,
    Reset,
    Button,
}

impl ControlKind {
    pub fn is_checkable(&self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }

    pub fn is_submit_or_reset(&self) -> bool {
        matches!(self, Self::Submit | Self::Reset)
    }
}

/// A snapshot of one control's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: String,
    pub name: Option<String>,
    pub kind: ControlKind,
    pub value: String,
    pub checked: bool,
}

/// Operations the engine needs from a bound form.
///
/// Element handles are string IDs. Every method tolerates unknown IDs:
/// reads return `None`/empty, writes are no-ops.
pub trait FormHost {
    /// Whether the bound root is a real form element.
    fn is_form(&self) -> bool;

    fn form_id(&self) -> String;

    /// Listed controls in document order.
    fn controls(&self) -> Vec<Control>;

    fn control(&self, id: &str) -> Option<Control>;

    /// Controls inside `container` (excluding the container), in document order.
    fn controls_within(&self, container: &str) -> Vec<Control>;

    /// IDs of every element carrying the attribute `name`, in document order.
    fn marked(&self, name: &str) -> Vec<String>;

    fn attribute(&self, id: &str, name: &str) -> Option<String>;

    fn set_attribute(&mut self, id: &str, name: &str, value: &str);

    fn has_class(&self, id: &str, class: &str) -> bool;

    fn add_class(&mut self, id: &str, class: &str);

    fn remove_class(&mut self, id: &str, class: &str);

    fn parent(&self, id: &str) -> Option<String>;

    /// The element itself or its nearest ancestor carrying `class`.
    fn closest_with_class(&self, id: &str, class: &str) -> Option<String>;

    /// Descendants of `container` carrying `class`, in document order.
    fn with_class_within(&self, container: &str, class: &str) -> Vec<String>;

    /// Whether `id` is `container` or one of its descendants.
    fn contains(&self, container: &str, id: &str) -> bool;

    /// Append a text node carrying `class` to `parent`. Returns its ID.
    fn append_message(&mut self, parent: &str, class: &str, text: &str) -> Option<String>;

    fn text(&self, id: &str) -> Option<String>;

    fn set_text(&mut self, id: &str, text: &str);

    fn remove_node(&mut self, id: &str) -> bool;

    /// Restore default values and checked states.
    fn native_reset(&mut self);

    fn focus(&mut self, id: &str) -> bool;
}
