//! Geometry of the floating menu bar.
use crate::core::{Document, NodeId, Rectangle};

/// The room, beyond its own height, the menu bar needs below the reference
/// line to float.
pub(super) const FLOAT_MARGIN: f32 = 10.0;

/// Where the menu bar belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Placement {
    /// In the flow of the wrapper.
    Docked,
    /// Pinned to the top of the viewport or the scrolled ancestor.
    Floating,
}

impl Placement {
    /// Computes the placement for a wrapper at `wrapper`, given the top of
    /// the visible area and the height of the menu bar.
    ///
    /// The bar floats once the wrapper top has scrolled past `reference` and
    /// enough of the wrapper is left below it to hold the bar.
    pub(super) fn of(wrapper: Rectangle, reference: f32, menu_height: f32) -> Self {
        if wrapper.top() < reference && wrapper.bottom() - reference >= menu_height + FLOAT_MARGIN {
            Placement::Floating
        } else {
            Placement::Docked
        }
    }
}

/// The top of the visible area: the top of the scrolled ancestor, clamped to
/// the viewport, or the viewport top for window scrolls.
pub(super) fn reference_top(document: &Document, scroll_ancestor: Option<NodeId>) -> f32 {
    scroll_ancestor.map_or(0.0, |ancestor| document.bounding_rect(ancestor).top().max(0.0))
}

/// Finds the closest ancestor of `node` with content overflowing its height.
pub(super) fn find_wrapping_scrollable(document: &Document, node: NodeId) -> Option<NodeId> {
    document
        .ancestors(node)
        .find(|&ancestor| document.scroll_height(ancestor) > document.client_height(ancestor))
}

/// How far content must scroll up for the caret to clear the menu bar.
pub(super) fn caret_overlap(menu: Rectangle, caret: Rectangle) -> Option<f32> {
    menu.overlaps_vertically(&caret)
        .then(|| menu.bottom() - caret.top())
}
