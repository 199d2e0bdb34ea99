use crate::EditorView;
use crate::core::{Document, NodeId};
use crate::menu::{Context, Dispose, Element, MenuElement, Rendered, Update, class};

use std::fmt;

/// A list of groups rendered with separators between them.
pub struct Grouped<S> {
    /// The slots and separators, in order, ready to be appended to a
    /// container.
    pub nodes: Vec<NodeId>,

    /// Updates every group and the separators between them.
    pub update: Update<S>,

    /// Tears down every group.
    pub dispose: Dispose,
}

impl<S> fmt::Debug for Grouped<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grouped")
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

/// Renders groups of elements, each element in its own slot, with a
/// separator between every two non-empty groups.
///
/// The update function shows a separator only while the groups on both of
/// its sides have something to show, and reports whether any group does.
pub fn render_grouped<V: EditorView>(
    cx: &Context<V>,
    document: &mut Document,
    content: &[Vec<Element<V>>],
) -> Grouped<V::State> {
    let mut nodes = Vec::new();
    let mut groups = Vec::new();
    let mut separators = Vec::new();
    let mut disposes = Vec::new();

    for elements in content.iter().filter(|elements| !elements.is_empty()) {
        if !groups.is_empty() {
            let separator = document.create_element("span");
            document.add_class(separator, class::SEPARATOR);

            nodes.push(separator);
            separators.push(separator);
        }

        let (slots, update, dispose) =
            render_slots(cx, document, elements, "span", class::ITEM);

        nodes.extend(slots);
        groups.push(update);
        disposes.push(dispose);
    }

    let update = Box::new(move |state: &V::State, document: &mut Document| -> bool {
        let visible: Vec<bool> = groups
            .iter_mut()
            .map(|update| update(state, document))
            .collect();

        for (&separator, show) in separators.iter().zip(separator_visibility(&visible)) {
            document.set_visible(separator, show);
        }

        visible.contains(&true)
    });

    Grouped {
        nodes,
        update,
        dispose: combine_disposes(disposes),
    }
}

/// Computes which separators to show, given which groups have content.
///
/// There is one separator between every two consecutive groups, and it is
/// shown only if both of them have content.
pub fn separator_visibility(groups: &[bool]) -> impl Iterator<Item = bool> + '_ {
    groups.windows(2).map(|pair| match pair {
        [before, after] => *before && *after,
        _ => false,
    })
}

/// Combines the updates of several slots into one.
///
/// Each slot in `nodes` is shown or hidden by the update at the same index.
/// The combined update reports whether any slot is shown.
pub fn combine_updates<S: 'static>(mut updates: Vec<Update<S>>, nodes: Vec<NodeId>) -> Update<S> {
    Box::new(move |state: &S, document: &mut Document| -> bool {
        let mut something = false;

        for (update, &node) in updates.iter_mut().zip(&nodes) {
            let visible = update(state, document);
            document.set_visible(node, visible);
            something |= visible;
        }

        something
    })
}

/// Combines several teardowns into one, run in order.
pub fn combine_disposes(disposes: Vec<Dispose>) -> Dispose {
    Box::new(move |document: &mut Document| {
        for dispose in disposes {
            dispose(document);
        }
    })
}

/// Renders every element into a new slot node and combines their updates
/// and teardowns.
pub(super) fn render_slots<V: EditorView>(
    cx: &Context<V>,
    document: &mut Document,
    elements: &[Element<V>],
    tag: &str,
    slot_class: &str,
) -> (Vec<NodeId>, Update<V::State>, Dispose) {
    let mut slots = Vec::with_capacity(elements.len());
    let mut updates = Vec::with_capacity(elements.len());
    let mut disposes = Vec::with_capacity(elements.len());

    for element in elements {
        let Rendered {
            node,
            update,
            dispose,
        } = element.render(cx, document);

        let slot = document.create_element(tag);
        document.add_class(slot, slot_class);
        let _ = document.append_child(slot, node);

        slots.push(slot);
        updates.push(update);
        disposes.push(dispose);
    }

    let update = combine_updates(updates, slots.clone());

    (slots, update, combine_disposes(disposes))
}
