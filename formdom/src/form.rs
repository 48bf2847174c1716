//! The bound form: a tree rooted at a `<form>` plus its focus state.

use crate::element::{self, Content, Element};
use crate::error::Error;
use crate::focus::{self, FocusState};
use crate::types::{InputType, Tag};

/// An in-memory form document.
///
/// Owns the element tree and tracks focus. Mutations that a browser would
/// perform on user input (`set_value`, `set_checked`) and the native
/// `reset()` live here; anything validation-specific lives in the engine.
#[derive(Debug, Clone)]
pub struct Form {
    root: Element,
    focus: FocusState,
}

impl Form {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focus: FocusState::new(),
        }
    }

    /// Whether the root is an actual `<form>` element.
    pub fn is_form(&self) -> bool {
        self.root.tag == Tag::Form
    }

    pub fn id(&self) -> &str {
        &self.root.id
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Listed controls in document order (the equivalent of `form.elements`).
    pub fn controls(&self) -> Vec<&Element> {
        self.query(Element::is_control)
    }

    /// Every element of the tree matching `pred`, in document order.
    pub fn query(&self, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        element::walk(&self.root)
            .into_iter()
            .filter(|&e| pred(e))
            .collect()
    }

    /// Descendants of `id` (excluding `id` itself) matching `pred`, in document order.
    pub fn query_within(&self, id: &str, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        match self.get(id) {
            Some(container) => element::walk(container)
                .into_iter()
                .skip(1)
                .filter(|&e| pred(e))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Elements carrying the attribute `name`, like `querySelectorAll('[name]')`.
    pub fn query_attr(&self, name: &str) -> Vec<&Element> {
        self.query(|e| e.has_attr(name))
    }

    pub fn parent(&self, id: &str) -> Option<&Element> {
        element::ancestors(&self.root, id).into_iter().next()
    }

    pub fn ancestors(&self, id: &str) -> Vec<&Element> {
        element::ancestors(&self.root, id)
    }

    pub fn closest(&self, id: &str, pred: impl Fn(&Element) -> bool) -> Option<&Element> {
        element::closest(&self.root, id, pred)
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Append `child` as the last child of `parent_id`. Returns the child's ID.
    pub fn append_child(&mut self, parent_id: &str, child: Element) -> Result<String, Error> {
        let parent = self
            .get_mut(parent_id)
            .ok_or_else(|| Error::not_found(parent_id))?;
        let child_id = child.id.clone();
        if let Content::Text(text) = &parent.content {
            // keep the text as a leading span so it is not lost
            let text = Element::span(text.clone());
            parent.content = Content::Children(vec![text]);
        }
        parent.push_child(child);
        Ok(child_id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        if self.focus.focused() == Some(id) {
            self.focus.clear();
        }
        element::remove_element(&mut self.root, id)
    }

    // ------------------------------------------------------------------
    // User input
    // ------------------------------------------------------------------

    /// Set the current value of a control, as typing would.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<(), Error> {
        let element = self.control_mut(id)?;
        element.value = value.into();
        Ok(())
    }

    /// Check or uncheck a radio/checkbox. Checking a radio unchecks the other
    /// radios of the form with the same name.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> Result<(), Error> {
        let element = self.control_mut(id)?;
        if !element.is_checkable() {
            return Err(Error::not_a_control(id, element.tag.to_string()));
        }
        element.checked = checked;

        let is_radio = element.input_type() == Some(InputType::Radio);
        let name = element.name.clone();
        if checked && is_radio {
            if let Some(name) = name {
                let siblings: Vec<String> = self
                    .query(|e| {
                        e.input_type() == Some(InputType::Radio)
                            && e.name.as_deref() == Some(name.as_str())
                            && e.id != id
                    })
                    .into_iter()
                    .map(|e| e.id.clone())
                    .collect();
                for sibling in siblings {
                    if let Some(radio) = self.get_mut(&sibling) {
                        radio.checked = false;
                    }
                }
            }
        }
        Ok(())
    }

    fn control_mut(&mut self, id: &str) -> Result<&mut Element, Error> {
        let element = self.get_mut(id).ok_or_else(|| Error::not_found(id))?;
        if !element.is_control() {
            return Err(Error::not_a_control(id, element.tag.to_string()));
        }
        Ok(element)
    }

    /// Native form reset: restore every control's default value and checked state.
    pub fn reset(&mut self) {
        let ids: Vec<String> = self.controls().iter().map(|e| e.id.clone()).collect();
        for id in &ids {
            if let Some(control) = self.get_mut(id) {
                control.reset();
            }
        }
        log::trace!("[form] reset {} controls of '{}'", ids.len(), self.root.id);
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Move focus to `id`. Returns false if the element does not exist or cannot take focus.
    pub fn focus(&mut self, id: &str) -> bool {
        if !self.get(id).is_some_and(focus::can_focus) {
            return false;
        }
        let previous = self.focus.set(id);
        self.mark_focused(previous.as_deref(), id);
        true
    }

    fn mark_focused(&mut self, previous: Option<&str>, current: &str) {
        if let Some(element) = previous.and_then(|id| self.get_mut(id)) {
            element.focused = false;
        }
        if let Some(element) = self.get_mut(current) {
            element.focused = true;
        }
    }
}

impl From<Element> for Form {
    fn from(root: Element) -> Self {
        Self::new(root)
    }
}
