//! A retained tree of nodes mirroring the display surface of the host.
//!
//! The [`Document`] owns every node the menus create, the layout the host
//! measured for them, and the listeners waiting for [`Event`]s. Widgets only
//! ever hold [`NodeId`]s and receive the document explicitly, which keeps
//! every mutation visible at the call site and makes the whole surface easy
//! to drive from tests.
mod layout;
mod listener;
mod node;
mod style;
mod window;

mod tests;

pub use layout::Layout;
pub use listener::{Handler, ListenerId};
pub use node::{Node, NodeId};
pub use style::{Display, Position, Style};
pub use window::Window;

use listener::Listener;

use crate::event::{self, Kind, Target};
use crate::{Event, Rectangle};

use slotmap::SlotMap;
use std::rc::Rc;

/// A retained tree of nodes, plus the listeners registered on them.
#[derive(Debug)]
pub struct Document {
    nodes: SlotMap<NodeId, Node>,
    body: NodeId,
    window: Window,
    listeners: SlotMap<ListenerId, Listener>,
    next_listener: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Window::default())
    }
}

impl Document {
    /// Creates an empty [`Document`] shown in the given [`Window`].
    pub fn new(window: Window) -> Self {
        let mut nodes = SlotMap::with_key();
        let body = nodes.insert(Node::new("body"));

        Self {
            nodes,
            body,
            window,
            listeners: SlotMap::with_key(),
            next_listener: 0,
        }
    }

    /// The root node of the document.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// The [`Window`] the document is shown in.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Replaces the [`Window`] of the document, e.g. after a resize.
    pub fn set_window(&mut self, window: Window) {
        self.window = window;
    }

    /// Returns the [`Node`] with the given id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Creates a new, detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.insert(Node::new(tag))
    }

    /// Frees a node and its whole subtree, along with every listener
    /// registered on any of them.
    ///
    /// The [`Document::body`] cannot be removed.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if id == self.body {
            log::warn!("remove_node: refusing to remove the body");
            return false;
        }

        if !self.nodes.contains_key(id) {
            log::warn!("remove_node: {id:?} does not exist");
            return false;
        }

        let _ = self.detach(id);

        let mut pending = vec![id];
        let mut removed = Vec::new();

        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(next) {
                pending.extend(node.children);
                removed.push(Target::Node(next));
            }
        }

        self.listeners
            .retain(|_, listener| !removed.contains(&listener.target));

        true
    }

    /// Returns the number of live nodes, including the body.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Sets the text content of a node.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.text = Some(text.into());
        }
    }

    /// Sets an attribute of a node.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id) {
            let _ = node.attributes.insert(name.to_owned(), value.into());
        }
    }

    /// Returns an attribute of a node.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|node| node.attribute(name))
    }

    /// Adds every whitespace-separated class in `classes` to a node.
    pub fn add_class(&mut self, id: NodeId, classes: &str) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };

        for class in classes.split_whitespace() {
            if !node.has_class(class) {
                node.classes.push(class.to_owned());
            }
        }
    }

    /// Removes a class from a node.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    /// Adds or removes a class depending on `on`.
    pub fn set_class(&mut self, id: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    /// Returns `true` if the node carries the given class.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes.get(id).is_some_and(|node| node.has_class(class))
    }

    /// Returns the inline [`Style`] of a node.
    pub fn style(&self, id: NodeId) -> Option<&Style> {
        self.nodes.get(id).map(Node::style)
    }

    /// Returns the inline [`Style`] of a node for mutation.
    pub fn style_mut(&mut self, id: NodeId) -> Option<&mut Style> {
        self.nodes.get_mut(id).map(|node| &mut node.style)
    }

    /// Shows or hides a node.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(style) = self.style_mut(id) {
            style.set_visible(visible);
        }
    }

    /// Returns `true` if the node itself is hidden.
    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.style(id).is_some_and(Style::is_hidden)
    }

    /// Returns the parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(Node::parent)
    }

    /// Returns the children of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(Node::children).unwrap_or(&[])
    }

    /// Iterates over the ancestors of a node, closest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&node| self.parent(node))
    }

    /// Returns `true` if `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|a| a == ancestor)
    }

    /// Returns `true` if the node is attached under [`Document::body`].
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(self.body, id)
    }

    /// Appends `child` to `parent`, moving it if it is already attached.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.insert_at(parent, child, None)
    }

    /// Inserts `child` into `parent` right before `reference`.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) -> bool {
        if self.parent(reference) != Some(parent) {
            log::warn!("insert_before: {reference:?} is not a child of {parent:?}");
            return false;
        }

        self.insert_at(parent, child, Some(reference))
    }

    fn insert_at(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) -> bool {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            log::warn!("insert: unknown node ({parent:?} <- {child:?})");
            return false;
        }

        if self.contains(child, parent) {
            log::warn!("insert: refusing to move {child:?} into its own subtree");
            return false;
        }

        let _ = self.detach(child);

        let Some(parent_node) = self.nodes.get_mut(parent) else {
            return false;
        };

        let index = reference
            .and_then(|reference| parent_node.children.iter().position(|&c| c == reference))
            .unwrap_or(parent_node.children.len());

        parent_node.children.insert(index, child);

        if let Some(child_node) = self.nodes.get_mut(child) {
            child_node.parent = Some(parent);
        }

        true
    }

    /// Removes `child` from `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent(child) != Some(parent) {
            log::warn!("remove_child: {child:?} is not a child of {parent:?}");
            return false;
        }

        self.detach(child)
    }

    /// Detaches a node from its parent, if any.
    ///
    /// The node and its subtree stay alive and can be attached again.
    pub fn detach(&mut self, id: NodeId) -> bool {
        let Some(parent) = self.parent(id) else {
            return false;
        };

        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.retain(|&c| c != id);
        }

        if let Some(node) = self.nodes.get_mut(id) {
            node.parent = None;
        }

        true
    }

    /// Puts `new` in the place `old` occupies under `parent`.
    pub fn replace_child(&mut self, parent: NodeId, new: NodeId, old: NodeId) -> bool {
        if self.parent(old) != Some(parent) {
            log::warn!("replace_child: {old:?} is not a child of {parent:?}");
            return false;
        }

        if new == old {
            return true;
        }

        if !self.nodes.contains_key(new) || self.contains(new, parent) {
            log::warn!("replace_child: cannot put {new:?} under {parent:?}");
            return false;
        }

        let _ = self.detach(new);

        let Some(index) = self.children(parent).iter().position(|&c| c == old) else {
            return false;
        };

        if let Some(slot) = self
            .nodes
            .get_mut(parent)
            .and_then(|parent_node| parent_node.children.get_mut(index))
        {
            *slot = new;
        }

        if let Some(node) = self.nodes.get_mut(new) {
            node.parent = Some(parent);
        }

        if let Some(node) = self.nodes.get_mut(old) {
            node.parent = None;
        }

        true
    }

    /// Returns the [`Layout`] of a node.
    pub fn layout(&self, id: NodeId) -> Layout {
        self.nodes.get(id).map(|node| node.layout).unwrap_or_default()
    }

    /// Replaces the [`Layout`] of a node.
    pub fn set_layout(&mut self, id: NodeId, layout: Layout) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.layout = layout;
        }
    }

    /// Replaces the border box of a node, keeping its scroll metrics.
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rectangle) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.layout.bounds = bounds;
        }
    }

    /// The border box of a node, relative to the viewport.
    pub fn bounding_rect(&self, id: NodeId) -> Rectangle {
        self.layout(id).bounds
    }

    /// The outer width of a node.
    pub fn offset_width(&self, id: NodeId) -> f32 {
        self.layout(id).bounds.width
    }

    /// The outer height of a node.
    pub fn offset_height(&self, id: NodeId) -> f32 {
        self.layout(id).bounds.height
    }

    /// The inner width of a node.
    pub fn client_width(&self, id: NodeId) -> f32 {
        self.layout(id).client().width
    }

    /// The inner height of a node.
    pub fn client_height(&self, id: NodeId) -> f32 {
        self.layout(id).client().height
    }

    /// The height of the scrollable content of a node.
    pub fn scroll_height(&self, id: NodeId) -> f32 {
        self.layout(id).scroll_height
    }

    /// The vertical scroll offset of a node.
    pub fn scroll_top(&self, id: NodeId) -> f32 {
        self.layout(id).scroll_top
    }

    /// Scrolls a node vertically, clamped to its scrollable range.
    pub fn set_scroll_top(&mut self, id: NodeId, scroll_top: f32) {
        if let Some(node) = self.nodes.get_mut(id) {
            let layout = &mut node.layout;
            let max = (layout.scroll_height - layout.client().height).max(0.0);

            layout.scroll_top = scroll_top.clamp(0.0, max);
        }
    }

    /// Registers a listener for events of the given [`Kind`] on `target`.
    pub fn add_listener(
        &mut self,
        target: impl Into<Target>,
        kind: Kind,
        handler: impl Fn(&mut Document, &Event) + 'static,
    ) -> ListenerId {
        let order = self.next_listener;
        self.next_listener += 1;

        self.listeners.insert(Listener {
            target: target.into(),
            kind,
            order,
            handler: Rc::new(handler),
        })
    }

    /// Removes a listener.
    ///
    /// Returns `false` if the listener was already removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        if self.listeners.remove(id).is_some() {
            true
        } else {
            log::warn!("remove_listener: {id:?} is not registered");
            false
        }
    }

    /// Returns `true` if the listener is still registered.
    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(id)
    }

    /// Counts the listeners registered for `kind` on `target`.
    pub fn listener_count(&self, target: impl Into<Target>, kind: Kind) -> usize {
        let target = target.into();

        self.listeners
            .values()
            .filter(|listener| listener.target == target && listener.kind == kind)
            .count()
    }

    /// Delivers an [`Event`] to its listeners.
    ///
    /// Bubbling events visit the target, then its ancestors, then the window.
    /// The listeners of each stop are collected when the event gets there, so
    /// a listener added further up the path while handling the event still
    /// sees it, and one removed before its turn does not.
    pub fn dispatch(&mut self, event: &Event) -> event::Status {
        for target in self.propagation_path(event) {
            let mut handlers: Vec<(u64, ListenerId, Handler)> = self
                .listeners
                .iter()
                .filter(|(_, listener)| listener.target == target && listener.kind == event.kind())
                .map(|(id, listener)| (listener.order, id, Rc::clone(&listener.handler)))
                .collect();

            handlers.sort_by_key(|(order, _, _)| *order);

            for (_, id, handler) in handlers {
                if !self.listeners.contains_key(id) {
                    continue;
                }

                handler(self, event);
            }
        }

        event.status()
    }

    fn propagation_path(&self, event: &Event) -> Vec<Target> {
        match event.target() {
            Target::Window => vec![Target::Window],
            Target::Node(node) if event.kind().bubbles() => std::iter::once(node)
                .chain(self.ancestors(node))
                .map(Target::Node)
                .chain(std::iter::once(Target::Window))
                .collect(),
            Target::Node(node) => vec![Target::Node(node)],
        }
    }
}
