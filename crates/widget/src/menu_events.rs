use crate::core::time::{Duration, Instant};
use crate::core::{Document, Event, NodeId};

use std::cell::Cell;
use std::rc::Rc;

/// The last event handled by a menu element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    /// When the event happened.
    pub time: Instant,

    /// The node the event targeted, if any.
    pub node: Option<NodeId>,
}

/// Remembers the last event a menu element handled.
///
/// Dropdowns close when the user clicks outside of them. Menu items inside a
/// dropdown may restructure the document while handling a click, so by the
/// time the click reaches the window the original target can be detached
/// already. Items [`mark`](Self::mark) the events they handle, and the
/// outside-click checks consult [`is_menu_event`](Self::is_menu_event)
/// before closing anything.
///
/// Clones share the same mark.
#[derive(Debug, Clone)]
pub struct MenuEvents {
    last: Rc<Cell<Option<Mark>>>,
    window: Duration,
}

impl MenuEvents {
    /// How long a mark stays fresh by default.
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

    /// Creates a new [`MenuEvents`] with the default freshness window.
    pub fn new() -> Self {
        Self::with_window(Self::DEFAULT_WINDOW)
    }

    /// Creates a new [`MenuEvents`] whose marks stay fresh for `window`.
    pub fn with_window(window: Duration) -> Self {
        Self {
            last: Rc::new(Cell::new(None)),
            window,
        }
    }

    /// Returns the freshness window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Records `event` as handled by a menu element.
    pub fn mark(&self, event: &Event) {
        self.last.set(Some(Mark {
            time: event.time(),
            node: event.node(),
        }));
    }

    /// Returns the current mark, if any.
    pub fn last(&self) -> Option<Mark> {
        self.last.get()
    }

    /// Forgets the current mark.
    pub fn reset(&self) {
        self.last.set(None);
    }

    /// Returns `true` if a menu element inside `wrapper` handled an event
    /// less than one window before `now`.
    pub fn is_menu_event(&self, document: &Document, wrapper: NodeId, now: Instant) -> bool {
        let Some(mark) = self.last.get() else {
            return false;
        };

        let fresh = now.saturating_duration_since(mark.time) < self.window;

        fresh && mark.node.is_some_and(|node| document.contains(wrapper, node))
    }

    /// Returns `true` if `event` belongs to the menu rooted at `wrapper`:
    /// either it targets a node inside of it, or a menu element inside of it
    /// handled an event just now.
    pub fn is_inside(&self, document: &Document, wrapper: NodeId, event: &Event) -> bool {
        event
            .node()
            .is_some_and(|node| document.contains(wrapper, node))
            || self.is_menu_event(document, wrapper, event.time())
    }
}

impl Default for MenuEvents {
    fn default() -> Self {
        Self::new()
    }
}
