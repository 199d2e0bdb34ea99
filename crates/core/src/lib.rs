//! The core library of [icy_prose_menu].
//!
//! This library holds the basic types that the menu widgets are built on: a
//! small set of geometry primitives, a retained node [`Document`] standing in
//! for the display surface of a rich-text editor, and the [`Event`]s that
//! flow through it.
//!
//! Nothing in here draws anything. A host embedding the menus is expected to
//! mirror its own layout into the [`Document`] (see [`dom::Layout`]) and to
//! forward user input through [`Document::dispatch`].
//!
//! [icy_prose_menu]: https://docs.rs/icy_prose_menu
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod dom;
pub mod event;
pub mod mouse;
pub mod time;

mod rectangle;
mod size;

pub use dom::{Document, NodeId};
pub use event::Event;
pub use rectangle::Rectangle;
pub use size::Size;
