use crate::Event;
use crate::dom::Document;
use crate::event::{Kind, Target};

use slotmap::new_key_type;
use std::fmt;
use std::rc::Rc;

new_key_type! {
    /// A unique identifier for a registered listener.
    ///
    /// Removing a listener consumes nothing; keep the id around and hand it
    /// back to [`Document::remove_listener`] exactly once.
    pub struct ListenerId;
}

/// A function invoked when an [`Event`] reaches a listener.
///
/// Handlers get mutable access to the [`Document`] they are registered on.
/// Any state of their own lives behind shared cells.
pub type Handler = Rc<dyn Fn(&mut Document, &Event)>;

#[derive(Clone)]
pub(super) struct Listener {
    pub(super) target: Target,
    pub(super) kind: Kind,
    pub(super) order: u64,
    pub(super) handler: Handler,
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("target", &self.target)
            .field("kind", &self.kind)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}
