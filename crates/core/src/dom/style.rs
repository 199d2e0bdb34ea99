/// Whether a node takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// The node is displayed as usual.
    #[default]
    Default,

    /// The node is hidden and takes no space.
    None,
}

/// How a node is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// The node sits in the normal flow of its parent.
    #[default]
    Static,

    /// The node is pinned to the viewport.
    Fixed,
}

/// The inline style of a node.
///
/// Only the properties the menus actually drive are modeled; anything else
/// a caller wants to attach goes into [`Style::css`] verbatim.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    /// The display mode.
    pub display: Display,
    /// The positioning scheme.
    pub position: Position,
    /// The `left` offset, in pixels.
    pub left: Option<f32>,
    /// The `top` offset, in pixels.
    pub top: Option<f32>,
    /// The fixed width, in pixels.
    pub width: Option<f32>,
    /// The fixed height, in pixels.
    pub height: Option<f32>,
    /// The minimum height, in pixels.
    pub min_height: Option<f32>,
    /// Free-form inline declarations.
    pub css: String,
}

impl Style {
    /// Returns `true` if the node is hidden.
    pub fn is_hidden(&self) -> bool {
        self.display == Display::None
    }

    /// Shows or hides the node.
    pub fn set_visible(&mut self, visible: bool) {
        self.display = if visible {
            Display::Default
        } else {
            Display::None
        };
    }

    /// Appends raw declarations to [`Style::css`].
    pub fn append_css(&mut self, css: &str) {
        if css.is_empty() {
            return;
        }

        if !self.css.is_empty() && !self.css.trim_end().ends_with(';') {
            self.css.push(';');
        }

        self.css.push_str(css);
    }
}
