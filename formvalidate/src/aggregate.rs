//! Whole-form views: required units, overall validity, values, reset.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::apply;
use crate::classify::{self, REQUIRED_ATTR};
use crate::config::{Config, Targeting};
use crate::host::{Control, FormHost};

/// A required unit and the element whose marker made it required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredUnit {
    pub unit: String,
    pub marker: String,
}

/// Every element carrying the required marker, resolved to the element its
/// state lives on. Deduplicated, in document order.
pub fn required_units<H: FormHost + ?Sized>(host: &H, config: &Config) -> Vec<RequiredUnit> {
    let mut seen = HashSet::new();
    let mut units = Vec::new();

    for marker in host.marked(REQUIRED_ATTR) {
        let Some(unit) = resolve_marker(host, config, &marker) else {
            continue;
        };
        if seen.insert(unit.clone()) {
            units.push(RequiredUnit { unit, marker });
        }
    }

    units
}

fn resolve_marker<H: FormHost + ?Sized>(host: &H, config: &Config, marker: &str) -> Option<String> {
    if let Some(control) = host.control(marker) {
        if control.kind.is_submit_or_reset() {
            return None;
        }
        return Some(classify::unit_of(host, config, &control));
    }

    // A wrapper: judge it by the first control it holds.
    let inner = host
        .controls_within(marker)
        .into_iter()
        .find(|c| !c.kind.is_submit_or_reset());
    match (inner, config.targeting) {
        (Some(control), _) => Some(classify::unit_of(host, config, &control)),
        (None, Targeting::Group) => Some(
            host.closest_with_class(marker, &config.input_group_class)
                .unwrap_or_else(|| marker.to_string()),
        ),
        (None, Targeting::Field) => Some(marker.to_string()),
    }
}

/// Required units not carrying the valid class, in document order.
pub fn invalid_units<H: FormHost + ?Sized>(host: &H, config: &Config) -> Vec<RequiredUnit> {
    required_units(host, config)
        .into_iter()
        .filter(|u| !host.has_class(&u.unit, &config.valid_class))
        .collect()
}

/// True when every required unit carries the valid class. A form without
/// required fields is valid.
pub fn is_valid<H: FormHost + ?Sized>(host: &H, config: &Config) -> bool {
    invalid_units(host, config).is_empty()
}

/// A collected field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    /// A checked control whose value is literally `true` or `false`.
    Bool(bool),
    /// A radio/checkbox cluster with nothing checked.
    Null,
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Field name → value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, FieldValue> {
        self.0
    }

    fn insert(&mut self, name: String, value: FieldValue) {
        self.0.insert(name, value);
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn checked_value(control: &Control) -> FieldValue {
    match control.value.as_str() {
        "true" => FieldValue::Bool(true),
        "false" => FieldValue::Bool(false),
        other => FieldValue::Text(other.to_string()),
    }
}

/// Collect the value of every named control, skipping submit/reset buttons.
///
/// Each radio/checkbox cluster yields one entry: the checked control's value
/// under its name, or `Null` under the first control's name. Checkables that
/// share a container outside any field group form one cluster per name.
pub fn collect_values<H: FormHost + ?Sized>(host: &H, config: &Config) -> FormValues {
    let mut values = FormValues::default();
    let mut clusters = HashSet::new();

    for control in host.controls() {
        if control.kind.is_submit_or_reset() {
            continue;
        }
        let Some(name) = control.name.clone().filter(|n| !n.is_empty()) else {
            continue;
        };

        if !control.kind.is_checkable() {
            values.insert(name, FieldValue::Text(control.value));
            continue;
        }

        let container = classify::cluster_container(host, config, &control.id);
        // outside a field group the container is shared, so clusters split by name
        let grouped = host
            .closest_with_class(&control.id, &config.input_group_class)
            .is_some();
        let key = (container.clone(), (!grouped).then(|| name.clone()));
        if !clusters.insert(key) {
            continue;
        }
        let checked = host.controls_within(&container).into_iter().find(|c| {
            c.kind.is_checkable() && c.checked && (grouped || c.name.as_deref() == Some(name.as_str()))
        });
        match checked {
            Some(c) => {
                let key = c.name.clone().filter(|n| !n.is_empty()).unwrap_or(name);
                values.insert(key, checked_value(&c));
            }
            None => values.insert(name, FieldValue::Null),
        }
    }

    values
}

/// Clear every marker the engine manages, then run the native reset.
pub fn reset<H: FormHost + ?Sized>(host: &mut H, config: &Config) {
    let units = required_units(host, config);
    for unit in &units {
        apply::clear(host, config, &unit.unit);
    }
    // markers left on controls by field-level targeting
    for control in host.controls() {
        host.remove_class(&control.id, &config.valid_class);
        host.remove_class(&control.id, &config.invalid_class);
    }
    host.native_reset();
    log::debug!("[aggregate] reset {} required units", units.len());
}
