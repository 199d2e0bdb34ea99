/// An error raised while assembling a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A [`MenuItemSpec`](crate::MenuItemSpec) supplied no visual content.
    #[error("menu item has no content: expected one of `render`, `icon` or `label`")]
    MissingContent,

    /// A [`MenuItemSpec`](crate::MenuItemSpec) supplied more than one kind of
    /// visual content.
    #[error("menu item has {count} kinds of content: expected exactly one of `render`, `icon` or `label`")]
    ConflictingContent {
        /// How many of `render`, `icon` and `label` were supplied.
        count: usize,
    },
}
