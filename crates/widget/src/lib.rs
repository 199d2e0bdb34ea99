//! Menu items, dropdowns and a floating menu bar for rich-text editors.
//!
//! A menu is described as [`Element`]s: leaf [`MenuItem`]s, [`Dropdown`]s
//! and [`DropdownSubmenu`]s nesting further elements, and plain groups.
//! Rendering an element against a [`Document`] produces its node together
//! with an update function; the host calls that function with every new
//! editor state, and each element toggles its own visibility and styling.
//!
//! The [`MenuBar`] ties everything together: it splices itself around the
//! editing surface of an [`EditorView`], renders grouped content with
//! separators, keeps its height from jumping around and, optionally, floats
//! at the top of the viewport while the editor scrolls underneath.
//!
//! ```ignore
//! use icy_prose_menu_widget::menu::{Dropdown, DropdownOptions, MenuItem, MenuItemSpec};
//! use icy_prose_menu_widget::{Context, MenuBar, MenuBarOptions, MenuEvents};
//!
//! let bold = MenuItem::new(
//!     MenuItemSpec::new(|state, dispatch, _view, _event| dispatch(toggle_bold(state)))
//!         .label("Bold")
//!         .active(|state| is_bold(state)),
//! )?;
//!
//! let cx = Context::new(view, MenuEvents::new());
//! let mut bar = MenuBar::new(
//!     &cx,
//!     &mut document,
//!     MenuBarOptions::new(vec![vec![bold.into()]]).floating(true),
//! );
//!
//! // After every transaction:
//! bar.update(&mut document);
//! ```
//!
//! [`Document`]: crate::core::Document
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_prose_menu_core as core;

pub mod editor;
pub mod menu;
pub mod menu_bar;
pub mod platform;

mod error;
mod menu_events;
mod state;

#[cfg(test)]
mod testing;

pub use editor::{EditorView, Selection};
pub use error::Error;
pub use menu::{
    Context, Dispose, Dropdown, DropdownOptions, DropdownSubmenu, Element, MenuElement, MenuItem,
    MenuItemSpec, Rendered, Update,
};
pub use menu_bar::{MenuBar, MenuBarOptions};
pub use menu_events::{Mark, MenuEvents};
