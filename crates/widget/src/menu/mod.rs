//! Menu elements: items, dropdowns and submenus.
//!
//! Every element renders into a [`Document`] and hands back a [`Rendered`]
//! node together with its [`Update`] and [`Dispose`] functions. The update
//! function is called with each new editor state and returns whether the
//! element has anything to show; containers hide the slots of elements that
//! do not. The dispose function closes what is open and removes every
//! listener the element registered.
//!
//! # Example
//!
//! ```ignore
//! use icy_prose_menu_widget::menu::{
//!     Dropdown, DropdownOptions, DropdownSubmenu, Element, MenuItem, MenuItemSpec,
//! };
//!
//! let heading = |level| {
//!     MenuItem::new(
//!         MenuItemSpec::new(move |state, dispatch, _, _| dispatch(set_heading(state, level)))
//!             .label(format!("Level {level}"))
//!             .enabled(move |state| can_set_heading(state, level)),
//!     )
//! };
//!
//! let headings = DropdownSubmenu::new(
//!     vec![heading(1)?.into(), heading(2)?.into()],
//!     DropdownOptions::new("Heading"),
//! );
//!
//! let block = Dropdown::new(
//!     vec![paragraph.into(), headings.into()],
//!     DropdownOptions::new("Type...").title("Change block type"),
//! );
//! ```
mod dropdown;
mod grouped;
mod icon;
mod item;
mod submenu;

pub use dropdown::{Dropdown, DropdownOptions};
pub use grouped::{
    Grouped, combine_disposes, combine_updates, render_grouped, separator_visibility,
};
pub use icon::Icon;
pub use item::{Activate, MenuItem, MenuItemSpec, Predicate, RenderContent, Title};
pub use submenu::DropdownSubmenu;

use crate::core::{Document, NodeId};
use crate::{EditorView, MenuEvents};

use std::fmt;
use std::rc::Rc;

/// The class names applied to rendered menu nodes.
pub mod class {
    /// The shared prefix of every menu class.
    pub const PREFIX: &str = "icy-menu";

    /// A slot holding a single element of a group.
    pub const ITEM: &str = "icy-menuitem";
    /// A separator between two groups.
    pub const SEPARATOR: &str = "icy-menuseparator";
    /// A group rendered inline.
    pub const GROUP: &str = "icy-menu-group";
    /// An item that cannot be activated in the current state.
    pub const DISABLED: &str = "icy-menu-disabled";
    /// An item whose state is currently active.
    pub const ACTIVE: &str = "icy-menu-active";
    /// An icon.
    pub const ICON: &str = "icy-icon";

    /// The label of a dropdown.
    pub const DROPDOWN: &str = "icy-menu-dropdown";
    /// The wrapper around a dropdown label and its menu.
    pub const DROPDOWN_WRAP: &str = "icy-menu-dropdown-wrap";
    /// The menu of an expanded dropdown.
    pub const DROPDOWN_MENU: &str = "icy-menu-dropdown-menu";
    /// A slot holding a single element of a dropdown menu.
    pub const DROPDOWN_ITEM: &str = "icy-menu-dropdown-item";

    /// The label of a submenu.
    pub const SUBMENU_LABEL: &str = "icy-menu-submenu-label";
    /// The wrapper around a submenu label and its menu.
    pub const SUBMENU_WRAP: &str = "icy-menu-submenu-wrap";
    /// The wrapper of a submenu the user opened.
    pub const SUBMENU_WRAP_ACTIVE: &str = "icy-menu-submenu-wrap-active";
    /// The menu of a submenu.
    pub const SUBMENU: &str = "icy-menu-submenu";

    /// The wrapper a menu bar splices around the editor.
    pub const MENUBAR_WRAPPER: &str = "icy-menubar-wrapper";
    /// The menu bar itself.
    pub const MENUBAR: &str = "icy-menubar";
    /// The placeholder keeping the space of a floating menu bar.
    pub const MENUBAR_SPACER: &str = "icy-menubar-spacer";
}

/// Updates a rendered element for a new editor state.
///
/// Returns whether the element has anything to show.
pub type Update<S> = Box<dyn FnMut(&S, &mut Document) -> bool>;

/// Tears down a rendered element.
///
/// Closes anything the element has open and removes the listeners it
/// registered. Nodes under the element's root are left to whoever removes
/// it.
pub type Dispose = Box<dyn FnOnce(&mut Document)>;

/// The output of rendering a menu element.
pub struct Rendered<S> {
    /// The root node of the element.
    pub node: NodeId,

    /// The update function of the element.
    pub update: Update<S>,

    /// The teardown of the element.
    pub dispose: Dispose,
}

impl<S> fmt::Debug for Rendered<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rendered")
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}

/// What menu elements need to know while rendering.
pub struct Context<V> {
    view: Rc<V>,
    menu_events: MenuEvents,
}

impl<V: EditorView> Context<V> {
    /// Creates a new [`Context`].
    pub fn new(view: Rc<V>, menu_events: MenuEvents) -> Self {
        Self { view, menu_events }
    }

    /// The editor the menu drives.
    pub fn view(&self) -> &Rc<V> {
        &self.view
    }

    /// The shared [`MenuEvents`] of the menu.
    pub fn menu_events(&self) -> &MenuEvents {
        &self.menu_events
    }

    /// Localizes `text` through the editor.
    pub fn translate(&self, text: &str) -> String {
        self.view.translate(text)
    }
}

impl<V> Clone for Context<V> {
    fn clone(&self) -> Self {
        Self {
            view: Rc::clone(&self.view),
            menu_events: self.menu_events.clone(),
        }
    }
}

impl<V> fmt::Debug for Context<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("menu_events", &self.menu_events)
            .finish_non_exhaustive()
    }
}

/// Something that can be rendered into a menu.
pub trait MenuElement<V: EditorView> {
    /// Renders the element into `document`.
    ///
    /// The returned node is detached; the caller places it.
    fn render(&self, cx: &Context<V>, document: &mut Document) -> Rendered<V::State>;
}

/// An element of a menu.
pub enum Element<V: EditorView> {
    /// A leaf item.
    Item(MenuItem<V>),
    /// A dropdown opening a menu of further elements.
    Dropdown(Dropdown<V>),
    /// A submenu nested in a dropdown.
    Submenu(DropdownSubmenu<V>),
    /// Several elements rendered side by side.
    Group(Vec<Element<V>>),
}

impl<V: EditorView> MenuElement<V> for Element<V> {
    fn render(&self, cx: &Context<V>, document: &mut Document) -> Rendered<V::State> {
        match self {
            Element::Item(item) => item.render(cx, document),
            Element::Dropdown(dropdown) => dropdown.render(cx, document),
            Element::Submenu(submenu) => submenu.render(cx, document),
            Element::Group(elements) => {
                let node = document.create_element("div");
                document.add_class(node, class::GROUP);

                let (slots, update, dispose) = grouped::render_slots(
                    cx,
                    document,
                    elements,
                    "span",
                    class::ITEM,
                );

                for slot in slots {
                    let _ = document.append_child(node, slot);
                }

                Rendered {
                    node,
                    update,
                    dispose,
                }
            }
        }
    }
}

impl<V: EditorView> fmt::Debug for Element<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Item(item) => f.debug_tuple("Item").field(item).finish(),
            Element::Dropdown(dropdown) => f.debug_tuple("Dropdown").field(dropdown).finish(),
            Element::Submenu(submenu) => f.debug_tuple("Submenu").field(submenu).finish(),
            Element::Group(elements) => f.debug_tuple("Group").field(elements).finish(),
        }
    }
}

impl<V: EditorView> From<MenuItem<V>> for Element<V> {
    fn from(item: MenuItem<V>) -> Self {
        Element::Item(item)
    }
}

impl<V: EditorView> From<Dropdown<V>> for Element<V> {
    fn from(dropdown: Dropdown<V>) -> Self {
        Element::Dropdown(dropdown)
    }
}

impl<V: EditorView> From<DropdownSubmenu<V>> for Element<V> {
    fn from(submenu: DropdownSubmenu<V>) -> Self {
        Element::Submenu(submenu)
    }
}

impl<V: EditorView> From<Vec<Element<V>>> for Element<V> {
    fn from(elements: Vec<Element<V>>) -> Self {
        Element::Group(elements)
    }
}
