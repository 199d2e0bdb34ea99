use crate::core::dom::ListenerId;
use crate::core::event::{Kind, Target};
use crate::core::{Document, NodeId};
use crate::menu::grouped::render_slots;
use crate::menu::{Context, Element, MenuElement, Rendered, class};
use crate::state::RcWrapper;
use crate::{EditorView, MenuEvents};

use std::fmt;

/// The options of a [`Dropdown`] or a
/// [`DropdownSubmenu`](crate::menu::DropdownSubmenu).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DropdownOptions {
    /// The translated text of the label.
    pub label: String,
    /// The tooltip of the label.
    pub title: Option<String>,
    /// An extra class for the label and the expanded menu.
    pub class: Option<String>,
    /// Extra inline style for the label.
    pub css: Option<String>,
}

impl DropdownOptions {
    /// Creates new [`DropdownOptions`] with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the tooltip of the label.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets an extra class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets extra inline style for the label.
    #[must_use]
    pub fn css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    pub(super) fn render_label(
        &self,
        document: &mut Document,
        translate: impl Fn(&str) -> String,
        label_class: &str,
    ) -> NodeId {
        let label = document.create_element("div");
        document.add_class(label, label_class);
        document.set_text(label, translate(&self.label));

        if let Some(class) = &self.class {
            document.add_class(label, class);
        }

        if let Some(title) = &self.title {
            document.set_attribute(label, "title", translate(title));
        }

        if let (Some(css), Some(style)) = (&self.css, document.style_mut(label)) {
            style.append_css(css);
        }

        label
    }
}

/// A label that expands a menu of further elements when pressed.
///
/// The menu closes when the label is pressed again, or when the primary
/// button is pressed anywhere outside of the dropdown.
pub struct Dropdown<V: EditorView> {
    content: Vec<Element<V>>,
    options: DropdownOptions,
}

impl<V: EditorView> Dropdown<V> {
    /// Creates a new [`Dropdown`] with the given content.
    pub fn new(content: Vec<Element<V>>, options: DropdownOptions) -> Self {
        Self { content, options }
    }

    /// Returns the options of the dropdown.
    pub fn options(&self) -> &DropdownOptions {
        &self.options
    }
}

impl<V: EditorView> fmt::Debug for Dropdown<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("content", &self.content)
            .field("options", &self.options)
            .finish()
    }
}

/// An expanded dropdown menu.
///
/// Closing is idempotent: only the first call detaches the menu.
#[derive(Debug)]
struct Expanded {
    menu: NodeId,
    done: bool,
}

impl Expanded {
    fn close(&mut self, document: &mut Document) -> bool {
        if self.done {
            return false;
        }

        self.done = true;
        let _ = document.detach(self.menu);

        true
    }
}

#[derive(Debug, Default)]
struct State {
    open: Option<Expanded>,
    listener: Option<ListenerId>,
}

impl<V: EditorView> MenuElement<V> for Dropdown<V> {
    fn render(&self, cx: &Context<V>, document: &mut Document) -> Rendered<V::State> {
        let (items, mut update_items, dispose_items) = render_slots(
            cx,
            document,
            &self.content,
            "div",
            class::DROPDOWN_ITEM,
        );

        let menu = document.create_element("div");
        document.add_class(menu, class::DROPDOWN_MENU);

        if let Some(extra_class) = &self.options.class {
            document.add_class(menu, extra_class);
        }

        for item in items {
            let _ = document.append_child(menu, item);
        }

        let label = self
            .options
            .render_label(document, |text| cx.translate(text), class::DROPDOWN);

        let wrap = document.create_element("div");
        document.add_class(wrap, class::DROPDOWN_WRAP);
        let _ = document.append_child(wrap, label);

        let state = RcWrapper::<State>::default();

        let label_listener = document.add_listener(label, Kind::MouseDown, {
            let state = state.clone();
            let menu_events = cx.menu_events().clone();

            move |document, event| {
                if !event.button().is_primary() {
                    return;
                }

                event.prevent_default();
                menu_events.mark(event);

                if state.with_data(|state| state.open.is_some()) {
                    close(&state, document);
                } else {
                    open(&state, document, &menu_events, wrap, menu);
                }
            }
        });

        let update = Box::new(move |state: &V::State, document: &mut Document| -> bool {
            let inner = update_items(state, document);
            document.set_visible(wrap, inner);
            inner
        });

        let dispose = Box::new(move |document: &mut Document| {
            close(&state, document);
            let _ = document.remove_listener(label_listener);
            dispose_items(document);
            let _ = document.remove_node(menu);
        });

        Rendered {
            node: wrap,
            update,
            dispose,
        }
    }
}

fn open(
    state: &RcWrapper<State>,
    document: &mut Document,
    menu_events: &MenuEvents,
    wrap: NodeId,
    menu: NodeId,
) {
    let _ = document.append_child(wrap, menu);

    let listener = document.add_listener(Target::Window, Kind::MouseDown, {
        let state = state.clone();
        let menu_events = menu_events.clone();

        move |document, event| {
            if !event.is_primary_press() || menu_events.is_inside(document, wrap, event) {
                return;
            }

            close(&state, document);
        }
    });

    state.with_data_mut(|state| {
        state.open = Some(Expanded { menu, done: false });
        state.listener = Some(listener);
    });

    log::debug!("dropdown opened");
}

fn close(state: &RcWrapper<State>, document: &mut Document) {
    let (open, listener) = state.with_data_mut(|state| (state.open.take(), state.listener.take()));

    let Some(mut open) = open else {
        log::trace!("dropdown already closed");
        return;
    };

    if open.close(document) {
        if let Some(listener) = listener {
            let _ = document.remove_listener(listener);
        }

        log::debug!("dropdown closed");
    }
}
