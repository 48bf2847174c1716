//! Presentation state: the valid/invalid classes and the inline message.
//!
//! Every operation is idempotent: applying the same state twice leaves one
//! class and at most one message node.

use crate::config::Config;
use crate::host::FormHost;

/// Attribute naming the unit a generated message node belongs to.
pub const OWNER_ATTR: &str = "data-msg-for";

/// Where the message node of `unit` lives: its field group, else its parent.
pub fn message_parent<H: FormHost + ?Sized>(host: &H, config: &Config, unit: &str) -> String {
    host.closest_with_class(unit, &config.input_group_class)
        .or_else(|| host.parent(unit))
        .unwrap_or_else(|| unit.to_string())
}

/// The message node currently shown for `unit`, if any.
///
/// Nodes are matched by owner. An untagged node is only adopted inside a
/// field group, where the group holds a single message.
pub fn message_node<H: FormHost + ?Sized>(host: &H, config: &Config, unit: &str) -> Option<String> {
    let parent = message_parent(host, config, unit);
    let nodes = host.with_class_within(&parent, &config.msg_class);
    let owner = |id: &str| host.attribute(id, OWNER_ATTR);

    if let Some(own) = nodes.iter().find(|id| owner(id.as_str()).as_deref() == Some(unit)) {
        return Some(own.clone());
    }
    host.closest_with_class(unit, &config.input_group_class)?;
    nodes.into_iter().find(|id| owner(id.as_str()).is_none())
}

/// Mark `unit` invalid and make sure exactly one message node shows `message`.
pub fn apply_invalid<H: FormHost + ?Sized>(host: &mut H, config: &Config, unit: &str, message: &str) {
    host.remove_class(unit, &config.valid_class);
    host.add_class(unit, &config.invalid_class);

    match message_node(host, config, unit) {
        Some(existing) => {
            if host.text(&existing).as_deref() != Some(message) {
                host.set_text(&existing, message);
            }
        }
        None => {
            let parent = message_parent(host, config, unit);
            if let Some(id) = host.append_message(&parent, &config.msg_class, message) {
                host.set_attribute(&id, OWNER_ATTR, unit);
            }
        }
    }
}

/// Mark `unit` valid and drop its message node.
pub fn apply_valid<H: FormHost + ?Sized>(host: &mut H, config: &Config, unit: &str) {
    host.remove_class(unit, &config.invalid_class);
    host.add_class(unit, &config.valid_class);

    if let Some(existing) = message_node(host, config, unit) {
        host.remove_node(&existing);
    }
}

/// Return `unit` to the untouched state: no class, no message.
pub fn clear<H: FormHost + ?Sized>(host: &mut H, config: &Config, unit: &str) {
    host.remove_class(unit, &config.valid_class);
    host.remove_class(unit, &config.invalid_class);

    if let Some(existing) = message_node(host, config, unit) {
        host.remove_node(&existing);
    }
}
