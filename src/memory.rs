//! In-memory document implementing [`Host`].
//!
//! A flat arena of nodes with parent links, enough structure to exercise the
//! gate without a browser. Tests build pages with [`MemoryHost::append`] and
//! simulate typing with [`MemoryHost::type_text`], which fires input listeners
//! the same way the browser would.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{Cancelable, Host};

/// Handle to a node in a [`MemoryHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<NodeId>,
    input_type: String,
    value: String,
    shown: bool,
    listeners: Vec<Rc<dyn Fn()>>,
}

#[derive(Default)]
struct Document {
    nodes: Vec<Node>,
    cookies: String,
    navigations: Vec<String>,
}

/// Shared handle to an in-memory document.
#[derive(Clone, Default)]
pub struct MemoryHost {
    doc: Rc<RefCell<Document>>,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `tag` node under `parent` (or at the root).
    pub fn append(&self, parent: Option<NodeId>, tag: &str) -> NodeId {
        let mut doc = self.doc.borrow_mut();
        let id = NodeId(doc.nodes.len());
        doc.nodes.push(Node {
            tag: tag.to_owned(),
            id: None,
            classes: Vec::new(),
            parent,
            input_type: if tag == "input" { "text".to_owned() } else { String::new() },
            value: String::new(),
            shown: true,
            listeners: Vec::new(),
        });
        id
    }

    /// Append a node and give it an `id` attribute.
    pub fn append_with_id(&self, parent: Option<NodeId>, tag: &str, id: &str) -> NodeId {
        let node = self.append(parent, tag);
        self.update(node, |n| n.id = Some(id.to_owned()));
        node
    }

    /// Read from `node`, or return `missing` for an id this document never
    /// handed out.
    fn read<T>(&self, node: NodeId, missing: T, f: impl FnOnce(&Node) -> T) -> T {
        self.doc.borrow().nodes.get(node.0).map_or(missing, f)
    }

    /// Modify `node`; ids from another document are ignored.
    fn update(&self, node: NodeId, f: impl FnOnce(&mut Node)) {
        match self.doc.borrow_mut().nodes.get_mut(node.0) {
            Some(entry) => f(entry),
            None => log::warn!("node {} is not in this document", node.0),
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.read(node, false, |n| n.classes.iter().any(|c| c == class))
    }

    pub fn is_shown(&self, node: NodeId) -> bool {
        self.read(node, false, |n| n.shown)
    }

    /// Set an input's value without firing listeners (page load, autofill).
    pub fn set_value(&self, node: NodeId, value: &str) {
        self.update(node, |n| value.clone_into(&mut n.value));
    }

    /// Set an input's value and fire its input listeners, as a user edit would.
    pub fn type_text(&self, node: NodeId, value: &str) {
        let mut listeners = Vec::new();
        self.update(node, |n| {
            value.clone_into(&mut n.value);
            listeners.clone_from(&n.listeners);
        });
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self, node: NodeId) -> usize {
        self.read(node, 0, |n| n.listeners.len())
    }

    pub fn set_cookies(&self, raw: &str) {
        raw.clone_into(&mut self.doc.borrow_mut().cookies);
    }

    /// Paths passed to [`Host::navigate`], oldest first.
    pub fn navigations(&self) -> Vec<String> {
        self.doc.borrow().navigations.clone()
    }
}

impl Host for MemoryHost {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.doc
            .borrow()
            .nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.doc
            .borrow()
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.classes.iter().any(|c| c == class))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn text_inputs(&self, text_input_class: &str) -> Vec<NodeId> {
        self.doc
            .borrow()
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.tag == "input" || n.classes.iter().any(|c| c == text_input_class))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.read(*element, None, |n| n.parent)
    }

    fn closest_with_class(&self, element: &NodeId, class: &str) -> Option<NodeId> {
        let doc = self.doc.borrow();
        let mut cursor = Some(*element);
        while let Some(node) = cursor {
            let entry = doc.nodes.get(node.0)?;
            if entry.classes.iter().any(|c| c == class) {
                return Some(node);
            }
            cursor = entry.parent;
        }
        None
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        self.update(*element, |n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_owned());
            }
        });
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.update(*element, |n| n.classes.retain(|c| c != class));
    }

    fn value(&self, element: &NodeId) -> String {
        self.read(*element, String::new(), |n| n.value.clone())
    }

    fn input_type(&self, element: &NodeId) -> String {
        self.read(*element, String::new(), |n| n.input_type.clone())
    }

    fn set_input_type(&self, element: &NodeId, kind: &str) {
        self.update(*element, |n| kind.clone_into(&mut n.input_type));
    }

    fn set_shown(&self, element: &NodeId, shown: bool) {
        self.update(*element, |n| n.shown = shown);
    }

    fn cookies(&self) -> String {
        self.doc.borrow().cookies.clone()
    }

    fn navigate(&self, path: &str) {
        self.doc.borrow_mut().navigations.push(path.to_owned());
    }

    fn on_input(&self, element: &NodeId, handler: Box<dyn Fn()>) {
        self.update(*element, |n| n.listeners.push(Rc::from(handler)));
    }
}

/// Submit event stand-in that records whether it was cancelled.
#[derive(Debug, Default)]
pub struct MemoryEvent {
    cancelled: std::cell::Cell<bool>,
}

impl MemoryEvent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl Cancelable for MemoryEvent {
    fn cancel(&self) {
        self.cancelled.set(true);
    }
}
