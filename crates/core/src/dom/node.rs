use crate::dom::{Layout, Style};

use rustc_hash::FxHashMap;
use slotmap::new_key_type;

new_key_type! {
    /// A unique identifier for a node of a [`Document`](crate::Document).
    pub struct NodeId;
}

/// A node of a [`Document`](crate::Document).
///
/// Structure (parent and children) is only mutable through the document, so
/// both sides of every link stay in sync.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub(super) tag: String,
    pub(super) classes: Vec<String>,
    pub(super) text: Option<String>,
    pub(super) attributes: FxHashMap<String, String>,
    pub(super) style: Style,
    pub(super) layout: Layout,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
}

impl Node {
    pub(super) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            ..Self::default()
        }
    }

    /// The tag name of the node (`div`, `span`, ...).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The classes of the node, in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns `true` if the node carries the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The text content of the node itself, excluding its children.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the value of an attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The inline [`Style`] of the node.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The [`Layout`] the host reported for the node.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The parent of the node, if attached.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The children of the node, in order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
