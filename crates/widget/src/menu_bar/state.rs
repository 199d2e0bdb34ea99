use super::float::{self, Placement};
use crate::Selection;
use crate::core::dom::{ListenerId, Position};
use crate::core::{Document, NodeId, Rectangle};
use crate::menu::class;
use crate::state::RcWrapper;

/// The state of a [`MenuBar`](super::MenuBar), shared with its scroll
/// listeners.
pub(super) type MenuBarState = RcWrapper<MenuBarStateInner>;

#[derive(Debug)]
pub(super) struct MenuBarStateInner {
    pub(super) wrapper: NodeId,
    pub(super) menu: NodeId,
    pub(super) editor: NodeId,
    pub(super) spacer: Option<NodeId>,
    pub(super) max_height: f32,
    pub(super) width_for_max_height: f32,
    pub(super) floating: bool,
    pub(super) scroll_listeners: Vec<ListenerId>,
}

impl MenuBarStateInner {
    pub(super) fn new(wrapper: NodeId, menu: NodeId, editor: NodeId) -> Self {
        Self {
            wrapper,
            menu,
            editor,
            spacer: None,
            max_height: 0.0,
            width_for_max_height: 0.0,
            floating: false,
            scroll_listeners: Vec::new(),
        }
    }

    /// Keeps the docked bar from shrinking while its items come and go.
    ///
    /// The tallest height seen is kept as the minimum height until the bar
    /// width changes.
    pub(super) fn stabilize_height(&mut self, document: &mut Document) {
        let width = document.offset_width(self.menu);

        if width != self.width_for_max_height {
            self.width_for_max_height = width;
            self.max_height = 0.0;
        }

        let height = document.offset_height(self.menu);

        if height > self.max_height {
            self.max_height = height;

            if let Some(style) = document.style_mut(self.menu) {
                style.min_height = Some(height);
            }
        }
    }

    /// Scrolls the closest scrollable ancestor so the caret is not hidden
    /// under the floating bar.
    pub(super) fn scroll_caret_into_view(&self, document: &mut Document, selection: &Selection) {
        let Some(caret) = selection.head() else {
            log::trace!("selection has no client rectangles");
            return;
        };

        let Some(overlap) = float::caret_overlap(document.bounding_rect(self.menu), caret) else {
            return;
        };

        let Some(scrollable) = float::find_wrapping_scrollable(document, self.wrapper) else {
            log::trace!("caret is under the menu bar, but nothing can scroll");
            return;
        };

        let scroll_top = document.scroll_top(scrollable);
        document.set_scroll_top(scrollable, scroll_top - overlap);
    }

    /// Docks or floats the bar after a scroll of `scroll_ancestor`, or of the
    /// window if `None`.
    pub(super) fn update_float(&mut self, document: &mut Document, scroll_ancestor: Option<NodeId>) {
        let wrapper = document.bounding_rect(self.wrapper);
        let reference = float::reference_top(document, scroll_ancestor);
        let placement = Placement::of(wrapper, reference, document.offset_height(self.menu));
        let pin_top = scroll_ancestor.map(|_| reference);

        match (self.floating, placement) {
            (false, Placement::Floating) => self.float(document, pin_top),
            (true, Placement::Docked) => self.dock(document),
            (true, Placement::Floating) => self.follow(document, wrapper, pin_top),
            (false, Placement::Docked) => {}
        }
    }

    fn float(&mut self, document: &mut Document, pin_top: Option<f32>) {
        let menu = document.bounding_rect(self.menu);

        if let Some(style) = document.style_mut(self.menu) {
            style.left = Some(menu.left());
            style.width = Some(menu.width);

            if let Some(top) = pin_top {
                style.top = Some(top);
            }

            style.position = Position::Fixed;
        }

        let spacer = document.create_element("div");
        document.add_class(spacer, class::MENUBAR_SPACER);

        if let Some(style) = document.style_mut(spacer) {
            style.height = Some(menu.height);
        }

        let _ = document.insert_before(self.wrapper, spacer, self.menu);

        self.spacer = Some(spacer);
        self.floating = true;

        log::debug!("menu bar floating");
    }

    fn dock(&mut self, document: &mut Document) {
        if let Some(style) = document.style_mut(self.menu) {
            style.position = Position::Static;
            style.left = None;
            style.top = None;
            style.width = None;
            style.set_visible(true);
        }

        if let Some(spacer) = self.spacer.take() {
            let _ = document.remove_node(spacer);
        }

        self.floating = false;

        log::debug!("menu bar docked");
    }

    fn follow(&mut self, document: &mut Document, wrapper: Rectangle, pin_top: Option<f32>) {
        let border = (document.offset_width(self.wrapper) - document.client_width(self.wrapper)) / 2.0;
        let below_viewport = wrapper.top() > document.window().size.height;

        if let Some(style) = document.style_mut(self.menu) {
            style.left = Some(wrapper.left() + border);
            style.set_visible(!below_viewport);

            if let Some(top) = pin_top {
                style.top = Some(top);
            }
        }
    }

    pub(super) fn remove_scroll_listeners(&mut self, document: &mut Document) {
        for listener in self.scroll_listeners.drain(..) {
            let _ = document.remove_listener(listener);
        }
    }
}
