use crate::Size;

/// An axis-aligned rectangle, in viewport coordinates.
///
/// `y` grows downwards, so [`Rectangle::top`] is the smallest `y` and
/// [`Rectangle::bottom`] the largest one; exactly like a client rectangle on
/// the web.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// X coordinate of the top-left corner.
    pub x: f32,

    /// Y coordinate of the top-left corner.
    pub y: f32,

    /// Width of the rectangle.
    pub width: f32,

    /// Height of the rectangle.
    pub height: f32,
}

impl Rectangle {
    /// Creates a new [`Rectangle`] spanning the given edges.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Returns the [`Size`] of the [`Rectangle`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The left edge.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// The top edge.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// The right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the vertical spans of both rectangles overlap.
    ///
    /// Touching edges do not count as an overlap.
    pub fn overlaps_vertically(&self, other: &Rectangle) -> bool {
        other.top() < self.bottom() && other.bottom() > self.top()
    }
}
