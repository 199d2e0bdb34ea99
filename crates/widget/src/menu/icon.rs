use crate::core::{Document, NodeId};
use crate::menu::class;

/// The icon of a menu item.
#[derive(Debug, Clone, PartialEq)]
pub enum Icon {
    /// A single SVG path.
    Path {
        /// The path data.
        path: String,
        /// The width of the view box.
        width: f32,
        /// The height of the view box.
        height: f32,
    },

    /// A piece of text, typically a glyph.
    Text {
        /// The text to show.
        text: String,
        /// Extra inline style for the text.
        css: Option<String>,
    },
}

impl Icon {
    /// Creates an [`Icon`] from SVG path data and its view box size.
    pub fn path(path: impl Into<String>, width: f32, height: f32) -> Self {
        Icon::Path {
            path: path.into(),
            width,
            height,
        }
    }

    /// Creates an [`Icon`] showing `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Icon::Text {
            text: text.into(),
            css: None,
        }
    }

    /// Attaches inline style to a text icon.
    ///
    /// Path icons are left as they are.
    #[must_use]
    pub fn css(mut self, style: impl Into<String>) -> Self {
        if let Icon::Text { css, .. } = &mut self {
            *css = Some(style.into());
        }
        self
    }

    /// Renders the icon into a new detached node.
    pub fn render(&self, document: &mut Document) -> NodeId {
        let node = document.create_element("div");
        document.add_class(node, class::ICON);

        match self {
            Icon::Path {
                path,
                width,
                height,
            } => {
                let svg = document.create_element("svg");
                document.set_attribute(svg, "viewBox", format!("0 0 {width} {height}"));

                let shape = document.create_element("path");
                document.set_attribute(shape, "d", path.as_str());

                let _ = document.append_child(svg, shape);
                let _ = document.append_child(node, svg);
            }
            Icon::Text { text, css } => {
                let span = document.create_element("span");
                document.set_text(span, text.as_str());

                if let (Some(css), Some(style)) = (css, document.style_mut(span)) {
                    style.append_css(css);
                }

                let _ = document.append_child(node, span);
            }
        }

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_icon() {
        let mut document = Document::default();
        let node = Icon::path("M0 0L10 10", 16.0, 12.0).render(&mut document);

        assert!(document.has_class(node, class::ICON));

        let svg = document.children(node)[0];
        assert_eq!(document.attribute(svg, "viewBox"), Some("0 0 16 12"));

        let path = document.children(svg)[0];
        assert_eq!(document.attribute(path, "d"), Some("M0 0L10 10"));
    }

    #[test]
    fn test_text_icon() {
        let mut document = Document::default();
        let node = Icon::text("¶").css("font-weight: bold").render(&mut document);

        let span = document.children(node)[0];
        let span = document.node(span).map(|span| {
            (
                span.text().map(str::to_owned),
                span.style().css.clone(),
            )
        });

        assert_eq!(
            span,
            Some((Some("¶".to_owned()), "font-weight: bold".to_owned()))
        );
    }
}
