//! Handle mouse input.

/// The button of a mouse.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub enum Button {
    /// The left mouse button.
    #[default]
    Left,

    /// The right mouse button.
    Right,

    /// The middle (wheel) button.
    Middle,

    /// The back mouse button.
    Back,

    /// The forward mouse button.
    Forward,

    /// Some other button.
    Other(u16),
}

impl Button {
    /// Returns `true` if this is the primary button of the pointer.
    pub fn is_primary(self) -> bool {
        matches!(self, Button::Left)
    }
}
