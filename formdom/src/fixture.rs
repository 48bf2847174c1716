//! JSON fixtures for building form trees.
//!
//! A fixture mirrors the markup a page would carry:
//!
//! ```json
//! {
//!   "id": "form",
//!   "tag": "form",
//!   "children": [
//!     {
//!       "tag": "div",
//!       "class": "form-group",
//!       "children": [
//!         { "tag": "input", "type": "text", "name": "name", "attrs": { "data-required": "" } }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `value` and `checked` set both the current and the default state, the way
//! the `value`/`checked` attributes do in markup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::element::{generate_id, Content, Element};
use crate::error::Error;
use crate::form::Form;
use crate::types::Tag;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub tag: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Space-separated class list, as in markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attrs: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSpec>,
}

impl From<ElementSpec> for Element {
    fn from(spec: ElementSpec) -> Self {
        let tag = Tag::parse(&spec.tag, spec.ty.as_deref());
        let mut element = Element::new(tag);
        element.id = spec.id.unwrap_or_else(|| generate_id(&spec.tag));
        element.name = spec.name;
        if let Some(class) = spec.class {
            for c in class.split_whitespace() {
                element.add_class(c);
            }
        }
        element.attrs = spec.attrs;
        if let Some(value) = spec.value {
            element.value = value.clone();
            element.default_value = value;
        }
        element.checked = spec.checked;
        element.default_checked = spec.checked;
        element.disabled = spec.disabled;

        if !spec.children.is_empty() {
            element.content =
                Content::Children(spec.children.into_iter().map(Element::from).collect());
        } else if let Some(text) = spec.text {
            element.content = Content::Text(text);
        }
        element
    }
}

impl From<&Element> for ElementSpec {
    fn from(element: &Element) -> Self {
        let ty = match &element.tag {
            Tag::Input(ty) => Some(ty.as_str().to_string()),
            Tag::Button(ty) => Some(
                match ty {
                    crate::ButtonType::Submit => "submit",
                    crate::ButtonType::Reset => "reset",
                    crate::ButtonType::Button => "button",
                }
                .to_string(),
            ),
            _ => None,
        };
        Self {
            id: Some(element.id.clone()),
            tag: element.tag.name().to_string(),
            ty,
            name: element.name.clone(),
            class: (!element.classes.is_empty()).then(|| element.classes.join(" ")),
            attrs: element.attrs.clone(),
            value: (!element.value.is_empty()).then(|| element.value.clone()),
            checked: element.checked,
            disabled: element.disabled,
            text: element.text_content().map(str::to_string),
            children: element.child_elements().iter().map(ElementSpec::from).collect(),
        }
    }
}

impl Form {
    /// Build a form from a JSON fixture.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let spec: ElementSpec = serde_json::from_str(json)?;
        Ok(Self::new(spec.into()))
    }

    /// Serialize the current tree (current values, current classes) back to JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&ElementSpec::from(self.root()))?)
    }
}
