use formdom::{ButtonType, Content, Element, Form, InputType, Tag};

use super::{Control, ControlKind, FormHost};

fn control_kind(element: &Element) -> Option<ControlKind> {
    let kind = match &element.tag {
        Tag::Input(InputType::Radio) => ControlKind::Radio,
        Tag::Input(InputType::Checkbox) => ControlKind::Checkbox,
        Tag::Input(InputType::Submit) => ControlKind::Submit,
        Tag::Input(InputType::Reset) => ControlKind::Reset,
        Tag::Input(InputType::Button) => ControlKind::Button,
        Tag::Input(_) => ControlKind::Text,
        Tag::Select => ControlKind::Select,
        Tag::Textarea => ControlKind::Textarea,
        Tag::Button(ButtonType::Submit) => ControlKind::Submit,
        Tag::Button(ButtonType::Reset) => ControlKind::Reset,
        Tag::Button(ButtonType::Button) => ControlKind::Button,
        _ => return None,
    };
    Some(kind)
}

fn to_control(element: &Element) -> Option<Control> {
    let kind = control_kind(element)?;
    // browsers report "on" for a checkbox/radio without a value attribute
    let value = if kind.is_checkable() && element.value.is_empty() {
        "on".to_string()
    } else {
        element.value.clone()
    };
    Some(Control {
        id: element.id.clone(),
        name: element.name.clone(),
        kind,
        value,
        checked: element.checked,
    })
}

impl FormHost for Form {
    fn is_form(&self) -> bool {
        Form::is_form(self)
    }

    fn form_id(&self) -> String {
        self.id().to_string()
    }

    fn controls(&self) -> Vec<Control> {
        Form::controls(self)
            .into_iter()
            .filter_map(to_control)
            .collect()
    }

    fn control(&self, id: &str) -> Option<Control> {
        self.get(id).and_then(to_control)
    }

    fn controls_within(&self, container: &str) -> Vec<Control> {
        self.query_within(container, Element::is_control)
            .into_iter()
            .filter_map(to_control)
            .collect()
    }

    fn marked(&self, name: &str) -> Vec<String> {
        self.query_attr(name)
            .into_iter()
            .map(|e| e.id.clone())
            .collect()
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.get(id)?.get_attr(name).map(str::to_string)
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) {
        if let Some(element) = self.get_mut(id) {
            element.set_attr(name, value);
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.has_class(class))
    }

    fn add_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.get_mut(id) {
            element.add_class(class);
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.get_mut(id) {
            element.remove_class(class);
        }
    }

    fn parent(&self, id: &str) -> Option<String> {
        Form::parent(self, id).map(|e| e.id.clone())
    }

    fn closest_with_class(&self, id: &str, class: &str) -> Option<String> {
        self.closest(id, |e| e.has_class(class))
            .map(|e| e.id.clone())
    }

    fn with_class_within(&self, container: &str, class: &str) -> Vec<String> {
        self.query_within(container, |e| e.has_class(class))
            .iter()
            .map(|e| e.id.clone())
            .collect()
    }

    fn contains(&self, container: &str, id: &str) -> bool {
        container == id || self.ancestors(id).iter().any(|e| e.id == container)
    }

    fn append_message(&mut self, parent: &str, class: &str, text: &str) -> Option<String> {
        let message = Element::span(text).class(class);
        match self.append_child(parent, message) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("[host] cannot append message to '{parent}': {e}");
                None
            }
        }
    }

    fn text(&self, id: &str) -> Option<String> {
        self.get(id)?.text_content().map(str::to_string)
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.get_mut(id) {
            element.content = Content::Text(text.to_string());
        }
    }

    fn remove_node(&mut self, id: &str) -> bool {
        self.remove(id).is_some()
    }

    fn native_reset(&mut self) {
        self.reset();
    }

    fn focus(&mut self, id: &str) -> bool {
        Form::focus(self, id)
    }
}
