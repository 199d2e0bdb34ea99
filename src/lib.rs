//! Menus, dropdowns and a floating menu bar for rich-text editors.
//!
//! The crate renders into a headless [`Document`]: a retained node tree
//! with a listener registry, geometry supplied by the host, and a tiny
//! event dispatcher. Hosts mirror their real surface into it, forward
//! pointer and scroll events, and apply the resulting class and style
//! changes back.
//!
//! An editor plugs in by implementing [`EditorView`]. Menus are described
//! as [`Element`]s and mounted with a [`MenuBar`]:
//!
//! ```ignore
//! use icy_prose_menu::menu::{Dropdown, DropdownOptions, Icon, MenuItem, MenuItemSpec};
//! use icy_prose_menu::{Context, MenuBar, MenuBarOptions, MenuEvents};
//!
//! let undo = MenuItem::new(
//!     MenuItemSpec::new(|state, dispatch, _, _| dispatch(undo(state)))
//!         .icon(Icon::text("↶"))
//!         .title("Undo last change")
//!         .enabled(can_undo),
//! )?;
//!
//! let cx = Context::new(view, MenuEvents::new());
//! let bar = MenuBar::new(
//!     &cx,
//!     &mut document,
//!     MenuBarOptions::new(vec![vec![undo.into()], vec![block_type.into()]]).floating(true),
//! );
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_prose_menu_core as core;
pub use icy_prose_menu_widget as widget;

pub use crate::core::dom;
pub use crate::core::event;
pub use crate::core::mouse;
pub use crate::core::time;
pub use crate::core::{Document, Event, NodeId, Rectangle, Size};

pub use crate::widget::menu;
pub use crate::widget::platform;
pub use crate::widget::{
    Context, Dropdown, DropdownOptions, DropdownSubmenu, EditorView, Element, Error, MenuBar,
    MenuBarOptions, MenuElement, MenuEvents, MenuItem, MenuItemSpec, Selection,
};

/// The result of assembling a menu.
pub type Result<T = (), E = Error> = std::result::Result<T, E>;
