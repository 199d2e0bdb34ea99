use crate::core::event::Kind;
use crate::core::{Document, Event, NodeId};
use crate::menu::{Context, Icon, MenuElement, Rendered, class};
use crate::{EditorView, Error};

use std::fmt;
use std::rc::Rc;

/// Runs the command of a menu item.
///
/// Receives the current editor state, a function dispatching transactions,
/// the editor and the event that activated the item.
pub type Activate<V> = Rc<
    dyn Fn(&<V as EditorView>::State, &dyn Fn(<V as EditorView>::Transaction), &V, &Event),
>;

/// A predicate over the editor state.
pub type Predicate<S> = Rc<dyn Fn(&S) -> bool>;

/// Renders custom content for a menu item.
pub type RenderContent<V> = Rc<dyn Fn(&V, &mut Document) -> NodeId>;

/// The tooltip of a menu item.
pub enum Title<S> {
    /// A fixed title.
    Static(String),

    /// A title computed from the editor state on every update.
    Dynamic(Rc<dyn Fn(&S) -> String>),
}

impl<S> Title<S> {
    /// Returns the title for the given state.
    pub fn resolve(&self, state: &S) -> String {
        match self {
            Title::Static(title) => title.clone(),
            Title::Dynamic(title) => title(state),
        }
    }
}

impl<S> fmt::Debug for Title<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Title::Static(title) => f.debug_tuple("Static").field(title).finish(),
            Title::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// The description of a [`MenuItem`].
///
/// Exactly one of [`render`](Self::render), [`icon`](Self::icon) or
/// [`label`](Self::label) must be supplied.
pub struct MenuItemSpec<V: EditorView> {
    run: Activate<V>,
    select: Option<Predicate<V::State>>,
    enable: Option<Predicate<V::State>>,
    active: Option<Predicate<V::State>>,
    render: Option<RenderContent<V>>,
    icon: Option<Icon>,
    label: Option<String>,
    title: Option<Title<V::State>>,
    class: Option<String>,
    css: Option<String>,
    activation_event: Kind,
}

impl<V: EditorView> MenuItemSpec<V> {
    /// Creates a new [`MenuItemSpec`] running `run` when activated.
    pub fn new(
        run: impl Fn(&V::State, &dyn Fn(V::Transaction), &V, &Event) + 'static,
    ) -> Self {
        Self {
            run: Rc::new(run),
            select: None,
            enable: None,
            active: None,
            render: None,
            icon: None,
            label: None,
            title: None,
            class: None,
            css: None,
            activation_event: Kind::MouseDown,
        }
    }

    /// Hides the item whenever `select` returns `false`.
    #[must_use]
    pub fn selectable(mut self, select: impl Fn(&V::State) -> bool + 'static) -> Self {
        self.select = Some(Rc::new(select));
        self
    }

    /// Greys out the item whenever `enable` returns `false`.
    #[must_use]
    pub fn enabled(mut self, enable: impl Fn(&V::State) -> bool + 'static) -> Self {
        self.enable = Some(Rc::new(enable));
        self
    }

    /// Highlights the item whenever `active` returns `true`.
    #[must_use]
    pub fn active(mut self, active: impl Fn(&V::State) -> bool + 'static) -> Self {
        self.active = Some(Rc::new(active));
        self
    }

    /// Renders the item with a custom function.
    #[must_use]
    pub fn render(mut self, render: impl Fn(&V, &mut Document) -> NodeId + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Renders the item as an [`Icon`].
    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Renders the item as a translated text label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets a fixed tooltip.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Title::Static(title.into()));
        self
    }

    /// Sets a tooltip computed from the editor state.
    #[must_use]
    pub fn title_with(mut self, title: impl Fn(&V::State) -> String + 'static) -> Self {
        self.title = Some(Title::Dynamic(Rc::new(title)));
        self
    }

    /// Adds a class to the rendered node.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Adds inline style to the rendered node.
    #[must_use]
    pub fn css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    /// Sets the kind of event activating the item.
    ///
    /// Defaults to [`Kind::MouseDown`], which only reacts to the primary
    /// button.
    #[must_use]
    pub fn activation_event(mut self, kind: Kind) -> Self {
        self.activation_event = kind;
        self
    }

    /// Returns whether the item can be activated in `state`.
    pub fn is_enabled(&self, state: &V::State) -> bool {
        self.enable.as_ref().is_none_or(|enable| enable(state))
    }

    fn content(&self) -> Result<Content<V>, Error> {
        let mut supplied = Vec::with_capacity(1);

        if let Some(render) = &self.render {
            supplied.push(Content::Custom(Rc::clone(render)));
        }

        if let Some(icon) = &self.icon {
            supplied.push(Content::Icon(icon.clone()));
        }

        if let Some(label) = &self.label {
            supplied.push(Content::Label(label.clone()));
        }

        if supplied.len() > 1 {
            return Err(Error::ConflictingContent {
                count: supplied.len(),
            });
        }

        supplied.pop().ok_or(Error::MissingContent)
    }
}

impl<V: EditorView> fmt::Debug for MenuItemSpec<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItemSpec")
            .field("icon", &self.icon)
            .field("label", &self.label)
            .field("title", &self.title)
            .field("class", &self.class)
            .field("css", &self.css)
            .field("activation_event", &self.activation_event)
            .finish_non_exhaustive()
    }
}

enum Content<V> {
    Custom(RenderContent<V>),
    Icon(Icon),
    Label(String),
}

/// A leaf menu element running a command when activated.
pub struct MenuItem<V: EditorView> {
    spec: Rc<MenuItemSpec<V>>,
    content: Content<V>,
}

impl<V: EditorView> MenuItem<V> {
    /// Creates a new [`MenuItem`].
    ///
    /// Fails unless exactly one kind of content was supplied.
    pub fn new(spec: MenuItemSpec<V>) -> Result<Self, Error> {
        let content = spec.content()?;

        Ok(Self {
            spec: Rc::new(spec),
            content,
        })
    }

    /// Returns the description of the item.
    pub fn spec(&self) -> &MenuItemSpec<V> {
        &self.spec
    }
}

impl<V: EditorView> fmt::Debug for MenuItem<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

impl<V: EditorView> MenuElement<V> for MenuItem<V> {
    fn render(&self, cx: &Context<V>, document: &mut Document) -> Rendered<V::State> {
        let spec = &self.spec;

        let node = match &self.content {
            Content::Custom(render) => render(cx.view(), document),
            Content::Icon(icon) => icon.render(document),
            Content::Label(label) => {
                let node = document.create_element("div");
                document.set_text(node, cx.translate(label));
                node
            }
        };

        if let Some(title) = &spec.title {
            let title = title.resolve(&cx.view().state());
            document.set_attribute(node, "title", cx.translate(&title));
        }

        if let Some(class) = &spec.class {
            document.add_class(node, class);
        }

        if let (Some(css), Some(style)) = (&spec.css, document.style_mut(node)) {
            style.append_css(css);
        }

        let listener = document.add_listener(node, spec.activation_event, {
            let spec = Rc::clone(spec);
            let view = Rc::clone(cx.view());
            let menu_events = cx.menu_events().clone();

            move |_document, event| {
                if event.kind() == Kind::MouseDown && !event.button().is_primary() {
                    return;
                }

                menu_events.mark(event);
                event.prevent_default();

                let state = view.state();

                if !spec.is_enabled(&state) {
                    log::trace!("menu item is disabled, ignoring activation");
                    return;
                }

                let dispatch = |transaction| view.dispatch(transaction);
                (spec.run)(&state, &dispatch, &view, event);
            }
        });

        let update = {
            let spec = Rc::clone(spec);
            let view = Rc::clone(cx.view());

            Box::new(move |state: &V::State, document: &mut Document| -> bool {
                if let Some(select) = &spec.select {
                    let selected = select(state);
                    document.set_visible(node, selected);

                    if !selected {
                        return false;
                    }
                }

                let mut enabled = true;

                if let Some(enable) = &spec.enable {
                    enabled = enable(state);
                    document.set_class(node, class::DISABLED, !enabled);
                }

                if let Some(active) = &spec.active {
                    document.set_class(node, class::ACTIVE, enabled && active(state));
                }

                if let Some(Title::Dynamic(title)) = &spec.title {
                    document.set_attribute(node, "title", view.translate(&title(state)));
                }

                true
            })
        };

        Rendered {
            node,
            update,
            dispose: Box::new(move |document: &mut Document| {
                let _ = document.remove_listener(listener);
            }),
        }
    }
}
