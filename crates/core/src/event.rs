//! Handle events of a user interface.
use crate::dom::NodeId;
use crate::mouse;
use crate::time::Instant;

use std::cell::Cell;

/// The kind of an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A mouse button was pressed.
    MouseDown,

    /// A mouse button was released.
    MouseUp,

    /// A full press and release over the same target.
    Click,

    /// The target scrolled.
    Scroll,
}

impl Kind {
    /// Returns `true` if events of this [`Kind`] travel from their target up
    /// to the window.
    ///
    /// Scroll events only reach listeners registered on their own target.
    pub fn bubbles(self) -> bool {
        !matches!(self, Kind::Scroll)
    }
}

/// Where an [`Event`] is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The window hosting the document.
    Window,

    /// A node of the document.
    Node(NodeId),
}

impl From<NodeId> for Target {
    fn from(node: NodeId) -> Self {
        Target::Node(node)
    }
}

/// A user interface event.
///
/// Handlers receive a shared reference; the only thing they may change is
/// whether the default action is prevented.
#[derive(Debug, Clone)]
pub struct Event {
    kind: Kind,
    target: Target,
    time: Instant,
    button: mouse::Button,
    default_prevented: Cell<bool>,
}

impl Event {
    /// Creates a new [`Event`].
    pub fn new(kind: Kind, target: impl Into<Target>, button: mouse::Button, time: Instant) -> Self {
        Self {
            kind,
            target: target.into(),
            time,
            button,
            default_prevented: Cell::new(false),
        }
    }

    /// Creates a [`Kind::MouseDown`] event.
    pub fn mouse_down(target: impl Into<Target>, button: mouse::Button, time: Instant) -> Self {
        Self::new(Kind::MouseDown, target, button, time)
    }

    /// Creates a [`Kind::Click`] event of the primary button.
    pub fn click(target: impl Into<Target>, time: Instant) -> Self {
        Self::new(Kind::Click, target, mouse::Button::Left, time)
    }

    /// Creates a [`Kind::Scroll`] event.
    pub fn scroll(target: impl Into<Target>, time: Instant) -> Self {
        Self::new(Kind::Scroll, target, mouse::Button::default(), time)
    }

    /// Returns the [`Kind`] of the [`Event`].
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the [`Target`] of the [`Event`].
    pub fn target(&self) -> Target {
        self.target
    }

    /// Returns the target node, unless the event targets the window.
    pub fn node(&self) -> Option<NodeId> {
        match self.target {
            Target::Node(node) => Some(node),
            Target::Window => None,
        }
    }

    /// Returns the [`Instant`] the event happened at.
    pub fn time(&self) -> Instant {
        self.time
    }

    /// Returns the mouse button involved, if any.
    pub fn button(&self) -> mouse::Button {
        self.button
    }

    /// Returns `true` if this is a press of the primary mouse button.
    pub fn is_primary_press(&self) -> bool {
        self.kind == Kind::MouseDown && self.button.is_primary()
    }

    /// Suppresses the default action of the host for this event.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    /// Returns whether [`Event::prevent_default`] was called.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Returns the [`Status`] of the event after dispatch.
    pub fn status(&self) -> Status {
        if self.is_default_prevented() {
            Status::Captured
        } else {
            Status::Ignored
        }
    }
}

/// The status of an [`Event`] after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Event`] was **NOT** handled by any listener.
    Ignored,

    /// The [`Event`] was handled and its default action suppressed.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use icy_prose_menu_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}
