//! Field classification: which element a control's state lives on, and
//! whether the control currently satisfies its rule.
//!
//! Everything here is a pure read of the host.

use crate::config::{Config, Targeting};
use crate::host::{Control, FormHost};
use crate::rules::Rule;

pub const REQUIRED_ATTR: &str = "data-required";
pub const RULE_ATTR: &str = "data-validate-rule";
pub const MSG_ATTR: &str = "data-validate-msg";
pub const REGEX_ATTR: &str = "data-validate-regex";

pub const DEFAULT_MESSAGE: &str = "Required field";

/// The outcome of classifying one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Element that carries the valid/invalid state.
    pub unit: String,
    /// The control that was classified.
    pub control: String,
    pub rule: Rule,
    pub valid: bool,
    /// Text for the inline error message.
    pub message: String,
}

/// Classify the control `control_id`. `None` if it is not a control of the form.
pub fn classify<H: FormHost + ?Sized>(
    host: &H,
    config: &Config,
    control_id: &str,
) -> Option<Classification> {
    let control = host.control(control_id)?;
    let unit = unit_of(host, config, &control);

    let (rule, valid) = if control.kind.is_checkable() {
        // any radio/checkbox in the container counts, whatever its name
        let checked = host
            .controls_within(&unit)
            .iter()
            .any(|c| c.kind.is_checkable() && c.checked);
        (Rule::Required, checked)
    } else {
        let rule = Rule::resolve(
            host.attribute(&control.id, RULE_ATTR).as_deref(),
            host.attribute(&control.id, REGEX_ATTR).as_deref(),
        );
        let valid = rule.check(&control.value, config.strict_whitespace);
        (rule, valid)
    };

    let message = message_for(host, config, &control.id, &unit);
    log::trace!(
        "[classify] control={} unit={} rule={} valid={}",
        control.id,
        unit,
        rule,
        valid
    );

    Some(Classification {
        unit,
        control: control.id,
        rule,
        valid,
        message,
    })
}

/// The element a control's validity state is applied to.
pub fn unit_of<H: FormHost + ?Sized>(host: &H, config: &Config, control: &Control) -> String {
    if control.kind.is_checkable() {
        return cluster_container(host, config, &control.id);
    }
    match config.targeting {
        Targeting::Group => host
            .closest_with_class(&control.id, &config.input_group_class)
            .unwrap_or_else(|| control.id.clone()),
        Targeting::Field => control.id.clone(),
    }
}

/// The container a radio/checkbox cluster is judged by.
///
/// Group targeting uses the field group. Field targeting uses the element two
/// levels up (radio → label → wrapper), unless that lies outside the field
/// group, in which case the group is used.
pub fn cluster_container<H: FormHost + ?Sized>(host: &H, config: &Config, control_id: &str) -> String {
    let group = host.closest_with_class(control_id, &config.input_group_class);
    let parent = host.parent(control_id);
    let grandparent = parent.as_deref().and_then(|p| host.parent(p));

    match (config.targeting, group, grandparent) {
        (Targeting::Group, Some(group), _) => group,
        (Targeting::Field, Some(group), Some(gp)) if host.contains(&group, &gp) => gp,
        (Targeting::Field, Some(group), _) => group,
        (_, None, Some(gp)) => gp,
        (_, None, None) => parent.unwrap_or_else(|| control_id.to_string()),
    }
}

/// The nearest non-empty `data-validate-msg`, searched from `from` upward until
/// the unit or a field group boundary, then on the unit itself.
pub fn message_for<H: FormHost + ?Sized>(host: &H, config: &Config, from: &str, unit: &str) -> String {
    let declared = |id: &str| host.attribute(id, MSG_ATTR).filter(|m| !m.is_empty());

    let mut current = Some(from.to_string());
    while let Some(id) = current {
        if let Some(msg) = declared(&id) {
            return msg;
        }
        if id == unit || host.has_class(&id, &config.input_group_class) {
            break;
        }
        current = host.parent(&id);
    }

    declared(unit).unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
}
