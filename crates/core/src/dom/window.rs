use crate::Size;

/// The window a [`Document`](crate::Document) is shown in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Window {
    /// The size of the viewport.
    pub size: Size,

    /// The user agent string of the platform.
    pub user_agent: String,
}

impl Window {
    /// Creates a new [`Window`] with the given viewport size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            user_agent: String::new(),
        }
    }

    /// Sets the user agent of the [`Window`].
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
