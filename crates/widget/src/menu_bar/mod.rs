//! A menu bar docked above an editor, optionally floating while it scrolls.
mod float;
mod state;

#[cfg(test)]
mod tests;

use state::{MenuBarState, MenuBarStateInner};

use crate::core::event::{Kind, Target};
use crate::core::{Document, Event, NodeId};
use crate::menu::{Context, Dispose, Element, Grouped, Update, class, render_grouped};
use crate::{EditorView, platform};

use std::fmt;
use std::rc::Rc;

/// The options of a [`MenuBar`].
pub struct MenuBarOptions<V: EditorView> {
    /// The groups of elements, rendered with separators between them.
    pub content: Vec<Vec<Element<V>>>,

    /// Whether the bar sticks to the top of the viewport while the editor
    /// scrolls past it.
    pub floating: bool,
}

impl<V: EditorView> MenuBarOptions<V> {
    /// Creates new [`MenuBarOptions`] with the given groups.
    pub fn new(content: Vec<Vec<Element<V>>>) -> Self {
        Self {
            content,
            floating: false,
        }
    }

    /// Makes the bar float.
    #[must_use]
    pub fn floating(mut self, floating: bool) -> Self {
        self.floating = floating;
        self
    }
}

impl<V: EditorView> Default for MenuBarOptions<V> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<V: EditorView> fmt::Debug for MenuBarOptions<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuBarOptions")
            .field("content", &self.content)
            .field("floating", &self.floating)
            .finish()
    }
}

/// A menu bar wrapping the editing surface of an [`EditorView`].
///
/// Mounting replaces the editor node with a wrapper holding the bar followed
/// by the editor. [`MenuBar::destroy`] puts the editor back and frees
/// everything the bar added.
pub struct MenuBar<V: EditorView> {
    view: Rc<V>,
    state: MenuBarState,
    content_update: Update<V::State>,
    content_dispose: Dispose,
}

impl<V: EditorView> MenuBar<V> {
    /// Mounts a new [`MenuBar`] around the editor of `cx`.
    pub fn new(cx: &Context<V>, document: &mut Document, options: MenuBarOptions<V>) -> Self {
        let view = Rc::clone(cx.view());
        let editor = view.dom();

        let wrapper = document.create_element("div");
        document.add_class(wrapper, class::MENUBAR_WRAPPER);

        let menu = document.create_element("div");
        document.add_class(menu, class::MENUBAR);
        let _ = document.append_child(wrapper, menu);

        match document.parent(editor) {
            Some(parent) => {
                let _ = document.replace_child(parent, wrapper, editor);
            }
            None => log::trace!("editor is not attached, leaving the wrapper detached"),
        }

        let _ = document.append_child(wrapper, editor);

        let Grouped {
            nodes,
            update,
            dispose,
        } = render_grouped(cx, document, &options.content);

        for node in nodes {
            let _ = document.append_child(menu, node);
        }

        let mut menu_bar = Self {
            view,
            state: MenuBarState::new(MenuBarStateInner::new(wrapper, menu, editor)),
            content_update: update,
            content_dispose: dispose,
        };

        menu_bar.update(document);

        if options.floating && !platform::is_ios(&document.window().user_agent) {
            menu_bar
                .state
                .with_data_mut(|state| state.update_float(document, None));

            menu_bar.listen_to_scrolls(document);
        }

        menu_bar
    }

    /// Updates the bar for the current editor state.
    ///
    /// Call this after every state change of the editor.
    pub fn update(&mut self, document: &mut Document) {
        let state = self.view.state();
        let _ = (self.content_update)(&state, document);

        if self.is_floating() {
            let Some(selection) = self.view.selection(document) else {
                log::trace!("editor has no selection");
                return;
            };

            self.state
                .with_data(|state| state.scroll_caret_into_view(document, &selection));
        } else {
            self.state
                .with_data_mut(|state| state.stabilize_height(document));
        }
    }

    /// Docks or floats the bar.
    ///
    /// Scrolls are handled automatically; call this after anything else that
    /// moves the editor, like a resize of the window. `scroll_ancestor` is
    /// the scrolled element, or `None` for the window.
    pub fn update_float(&self, document: &mut Document, scroll_ancestor: Option<NodeId>) {
        self.state
            .with_data_mut(|state| state.update_float(document, scroll_ancestor));
    }

    /// Returns `true` if the bar is currently floating.
    pub fn is_floating(&self) -> bool {
        self.state.with_data(|state| state.floating)
    }

    /// The wrapper around the bar and the editor.
    pub fn wrapper(&self) -> NodeId {
        self.state.with_data(|state| state.wrapper)
    }

    /// The bar itself.
    pub fn menu(&self) -> NodeId {
        self.state.with_data(|state| state.menu)
    }

    /// The placeholder keeping the space of the floating bar, if floating.
    pub fn spacer(&self) -> Option<NodeId> {
        self.state.with_data(|state| state.spacer)
    }

    /// The tallest height seen since the width of the bar last changed.
    pub fn max_height(&self) -> f32 {
        self.state.with_data(|state| state.max_height)
    }

    /// Unmounts the bar, putting the editor back where the wrapper was.
    ///
    /// Open dropdowns are closed, every listener of the bar and its content
    /// is removed, and the wrapper is freed.
    pub fn destroy(self, document: &mut Document) {
        let (wrapper, editor) = self.state.with_data_mut(|state| {
            state.remove_scroll_listeners(document);
            (state.wrapper, state.editor)
        });

        (self.content_dispose)(document);

        match document.parent(wrapper) {
            Some(parent) => {
                let _ = document.replace_child(parent, editor, wrapper);
            }
            None => {
                log::trace!("menu bar wrapper is not attached");
                let _ = document.detach(editor);
            }
        }

        let _ = document.remove_node(wrapper);

        log::debug!("menu bar destroyed");
    }

    fn listen_to_scrolls(&self, document: &mut Document) {
        let wrapper = self.wrapper();

        let targets: Vec<Target> = std::iter::once(Target::Window)
            .chain(document.ancestors(wrapper).map(Target::Node))
            .collect();

        let listeners = targets
            .into_iter()
            .map(|target| {
                let state = self.state.clone();

                document.add_listener(target, Kind::Scroll, move |document, event| {
                    on_scroll(&state, document, event);
                })
            })
            .collect::<Vec<_>>();

        self.state
            .with_data_mut(|state| state.scroll_listeners = listeners);
    }
}

impl<V: EditorView> fmt::Debug for MenuBar<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.state.with_data(|state| {
            f.debug_struct("MenuBar")
                .field("state", state)
                .finish_non_exhaustive()
        })
    }
}

fn on_scroll(state: &MenuBarState, document: &mut Document, event: &Event) {
    state.with_data_mut(|state| {
        if !document.is_connected(state.wrapper) {
            log::debug!("menu bar detached, removing scroll listeners");
            state.remove_scroll_listeners(document);
            return;
        }

        state.update_float(document, event.node());
    });
}
