use crate::{Rectangle, Size};

/// The geometry of a node, as measured by the host.
///
/// The document never computes layout on its own. Hosts copy their measured
/// boxes in with [`Document::set_layout`](crate::Document::set_layout) or
/// [`Document::set_bounds`](crate::Document::set_bounds) before forwarding
/// the events that depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    /// The border box, relative to the viewport.
    pub bounds: Rectangle,

    /// The inner size, excluding borders and scroll bars.
    ///
    /// Defaults to the size of [`Layout::bounds`].
    pub client_size: Option<Size>,

    /// The total height of the scrollable content.
    pub scroll_height: f32,

    /// The current vertical scroll offset.
    pub scroll_top: f32,
}

impl Layout {
    /// Creates a [`Layout`] for a plain box with the given bounds.
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Sets the inner size of the box.
    #[must_use]
    pub fn client_size(mut self, size: Size) -> Self {
        self.client_size = Some(size);
        self
    }

    /// Sets the height of the scrollable content.
    #[must_use]
    pub fn scroll_height(mut self, height: f32) -> Self {
        self.scroll_height = height;
        self
    }

    /// Returns the inner size, falling back to the border box.
    pub fn client(&self) -> Size {
        self.client_size.unwrap_or(self.bounds.size())
    }

    /// Returns `true` if the content overflows vertically.
    pub fn is_scrollable(&self) -> bool {
        self.scroll_height > self.client().height
    }
}
