mod content;
mod node;

pub use content::Content;
pub use node::Element;

pub(crate) use node::generate_id;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Ancestors of the element with `id`, nearest first. Empty if `id` is the
/// root or is not in the tree.
pub fn ancestors<'a>(root: &'a Element, id: &str) -> Vec<&'a Element> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        // path holds root..=target
        path.pop();
        path.reverse();
        path
    } else {
        Vec::new()
    }
}

fn collect_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }
    for child in element.child_elements() {
        if collect_path(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// The element itself or its nearest ancestor matching `pred`, like DOM `closest`.
pub fn closest<'a>(
    root: &'a Element,
    id: &str,
    pred: impl Fn(&Element) -> bool,
) -> Option<&'a Element> {
    let element = find_element(root, id)?;
    if pred(element) {
        return Some(element);
    }
    ancestors(root, id).into_iter().find(|&e| pred(e))
}

/// Every element of the subtree in document (pre-order) order, `element` first.
pub fn walk(element: &Element) -> Vec<&Element> {
    let mut result = Vec::new();
    walk_recursive(element, &mut result);
    result
}

fn walk_recursive<'a>(element: &'a Element, result: &mut Vec<&'a Element>) {
    result.push(element);
    for child in element.child_elements() {
        walk_recursive(child, result);
    }
}

/// Remove the element with `id` from the tree, returning it. The root cannot be removed.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    let Content::Children(children) = &mut root.content else {
        return None;
    };
    if let Some(pos) = children.iter().position(|c| c.id == id) {
        let removed = children.remove(pos);
        if children.is_empty() {
            root.content = Content::None;
        }
        return Some(removed);
    }
    for child in children.iter_mut() {
        if let Some(found) = remove_element(child, id) {
            return Some(found);
        }
    }
    None
}
