use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{ButtonType, InputType, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    pub name: Option<String>,

    // Content
    pub content: Content,

    // Presentation
    pub classes: Vec<String>,

    // Attributes other than id/name/class/type/value/checked
    pub attrs: HashMap<String, String>,

    // Control state. `default_*` is what a form reset restores.
    pub value: String,
    pub default_value: String,
    pub checked: bool,
    pub default_checked: bool,

    // Interaction
    pub focusable: bool,
    /// Set by `Form::focus`, not by the user.
    pub focused: bool,
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            name: None,
            content: Content::None,
            classes: Vec::new(),
            attrs: HashMap::new(),
            value: String::new(),
            default_value: String::new(),
            checked: false,
            default_checked: false,
            focusable: false,
            focused: false,
            disabled: false,
        }
    }
}

impl Element {
    /// Create an element for an arbitrary tag.
    pub fn new(tag: Tag) -> Self {
        let focusable = tag.is_control();
        let prefix = match &tag {
            Tag::Input(_) | Tag::Select | Tag::Textarea => "input",
            Tag::Button(_) => "button",
            _ => "el",
        };
        Self {
            id: generate_id(prefix),
            tag,
            focusable,
            ..Default::default()
        }
    }

    pub fn form() -> Self {
        Self {
            id: generate_id("form"),
            tag: Tag::Form,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            tag: Tag::Div,
            ..Default::default()
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self {
            id: generate_id("label"),
            tag: Tag::Label,
            content: Content::Text(text.into()),
            ..Default::default()
        }
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self {
            id: generate_id("span"),
            tag: Tag::Span,
            content: Content::Text(text.into()),
            ..Default::default()
        }
    }

    pub fn input(ty: InputType) -> Self {
        Self::new(Tag::Input(ty))
    }

    /// Create a text input element.
    pub fn text_input(name: impl Into<String>) -> Self {
        Self::input(InputType::Text).name(name)
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::input(InputType::Radio).name(name).value(value)
    }

    pub fn checkbox(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::input(InputType::Checkbox).name(name).value(value)
    }

    pub fn select(name: impl Into<String>) -> Self {
        Self::new(Tag::Select).name(name)
    }

    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: generate_id("option"),
            tag: Tag::Option,
            content: Content::Text(label.into()),
            ..Default::default()
        }
        .value(value)
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(Tag::Textarea).name(name)
    }

    pub fn button(ty: ButtonType) -> Self {
        Self::new(Tag::Button(ty))
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    // Presentation
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Set both the current and the default value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.default_value = self.value.clone();
        self
    }

    /// Set both the current and the default checked state.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self.default_checked = checked;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.push_child(child);
        }
        self
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    /// Text content of this element, if it holds text rather than children.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    // Class list
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns false if it was already present.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if class.is_empty() || self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    // Attribute access
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn remove_attr(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    // Control helpers
    pub fn is_control(&self) -> bool {
        self.tag.is_control()
    }

    pub fn input_type(&self) -> Option<InputType> {
        match self.tag {
            Tag::Input(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn is_checkable(&self) -> bool {
        self.input_type().is_some_and(|ty| ty.is_checkable())
    }

    /// Submit and reset buttons, in either `<button>` or `<input>` form.
    pub fn is_submit_or_reset(&self) -> bool {
        matches!(
            self.tag,
            Tag::Button(ButtonType::Submit | ButtonType::Reset)
                | Tag::Input(InputType::Submit | InputType::Reset)
        )
    }

    /// Restore the default value and checked state.
    pub fn reset(&mut self) {
        self.value = self.default_value.clone();
        self.checked = self.default_checked;
    }
}
