use crate::EditorView;
use crate::core::dom::ListenerId;
use crate::core::event::{Kind, Target};
use crate::core::{Document, NodeId};
use crate::menu::grouped::render_slots;
use crate::menu::{Context, DropdownOptions, Element, MenuElement, Rendered, class};
use crate::state::RcWrapper;

use std::fmt;

/// A labelled menu nested inside a [`Dropdown`](crate::menu::Dropdown).
///
/// Unlike a dropdown, the nested menu is always part of the document;
/// pressing the label only marks the submenu active, and pressing outside
/// of it clears the mark again.
pub struct DropdownSubmenu<V: EditorView> {
    content: Vec<Element<V>>,
    options: DropdownOptions,
}

impl<V: EditorView> DropdownSubmenu<V> {
    /// Creates a new [`DropdownSubmenu`] with the given content.
    pub fn new(content: Vec<Element<V>>, options: DropdownOptions) -> Self {
        Self { content, options }
    }

    /// Returns the options of the submenu.
    pub fn options(&self) -> &DropdownOptions {
        &self.options
    }
}

impl<V: EditorView> fmt::Debug for DropdownSubmenu<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownSubmenu")
            .field("content", &self.content)
            .field("options", &self.options)
            .finish()
    }
}

impl<V: EditorView> MenuElement<V> for DropdownSubmenu<V> {
    fn render(&self, cx: &Context<V>, document: &mut Document) -> Rendered<V::State> {
        let (items, mut update_items, dispose_items) = render_slots(
            cx,
            document,
            &self.content,
            "div",
            class::DROPDOWN_ITEM,
        );

        let label = self
            .options
            .render_label(document, |text| cx.translate(text), class::SUBMENU_LABEL);

        let menu = document.create_element("div");
        document.add_class(menu, class::SUBMENU);

        for item in items {
            let _ = document.append_child(menu, item);
        }

        let wrap = document.create_element("div");
        document.add_class(wrap, class::SUBMENU_WRAP);
        let _ = document.append_child(wrap, label);
        let _ = document.append_child(wrap, menu);

        let listener = RcWrapper::<Option<ListenerId>>::default();

        let label_listener = document.add_listener(label, Kind::MouseDown, {
            let listener = listener.clone();
            let menu_events = cx.menu_events().clone();

            move |document, event| {
                if !event.button().is_primary() {
                    return;
                }

                event.prevent_default();
                menu_events.mark(event);
                document.add_class(wrap, class::SUBMENU_WRAP_ACTIVE);

                if listener.with_data(Option::is_some) {
                    return;
                }

                let id = document.add_listener(Target::Window, Kind::MouseDown, {
                    let listener = listener.clone();
                    let menu_events = menu_events.clone();

                    move |document, event| {
                        if !event.is_primary_press()
                            || menu_events.is_inside(document, wrap, event)
                        {
                            return;
                        }

                        document.remove_class(wrap, class::SUBMENU_WRAP_ACTIVE);

                        if let Some(id) = listener.with_data_mut(Option::take) {
                            let _ = document.remove_listener(id);
                        }

                        log::debug!("submenu deactivated");
                    }
                });

                listener.with_data_mut(|listener| *listener = Some(id));
                log::debug!("submenu activated");
            }
        });

        let update = Box::new(move |state: &V::State, document: &mut Document| -> bool {
            let inner = update_items(state, document);
            document.set_visible(wrap, inner);
            inner
        });

        let dispose = Box::new(move |document: &mut Document| {
            if let Some(id) = listener.with_data_mut(Option::take) {
                let _ = document.remove_listener(id);
            }

            let _ = document.remove_listener(label_listener);
            dispose_items(document);
        });

        Rendered {
            node: wrap,
            update,
            dispose,
        }
    }
}
