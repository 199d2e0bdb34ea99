//! The contract between the menus and the editor they drive.
use crate::core::{Document, NodeId, Rectangle};

/// The editing surface a menu is attached to.
///
/// Implementations are expected to be cheap handles: the menus keep an
/// `Rc` of the view inside their listeners and ask it for a fresh
/// [`EditorView::State`] whenever an item is activated.
pub trait EditorView: 'static {
    /// A snapshot of the document and selection of the editor.
    type State: 'static;

    /// A prepared change to the editor state.
    type Transaction: 'static;

    /// Returns the current state of the editor.
    fn state(&self) -> Self::State;

    /// Applies a transaction to the editor.
    fn dispatch(&self, transaction: Self::Transaction);

    /// The node containing the editing surface.
    ///
    /// The [`MenuBar`](crate::MenuBar) wraps this node when mounted.
    fn dom(&self) -> NodeId;

    /// Localizes a user-visible string.
    fn translate(&self, text: &str) -> String {
        text.to_owned()
    }

    /// Returns the current text selection, if the editor has focus.
    fn selection(&self, _document: &Document) -> Option<Selection> {
        None
    }
}

/// The text selection of an editor, as client rectangles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    /// The client rectangles of the selected range, in document order.
    pub rects: Vec<Rectangle>,

    /// Whether the head of the selection comes before its anchor.
    pub inverted: bool,
}

impl Selection {
    /// Creates a new [`Selection`] covering the given rectangles.
    pub fn new(rects: Vec<Rectangle>) -> Self {
        Self {
            rects,
            inverted: false,
        }
    }

    /// Marks the selection as inverted.
    #[must_use]
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// The rectangle holding the caret: the last one, or the first one if
    /// the selection is inverted.
    pub fn head(&self) -> Option<Rectangle> {
        if self.inverted {
            self.rects.first().copied()
        } else {
            self.rects.last().copied()
        }
    }
}
