//! # mdview
//!
//! Render markdown syntax trees into native view element trees.
//!
//! A markdown parser produces a tree of [`Node`]s; this library turns each
//! node into platform visual elements (styled text, containers, images,
//! a web-content host, a table grid) through a fixed dispatch table of
//! per-type renderers.
//!
//! ## Quick Start
//!
//! ```
//! use mdview::{MarkdownView, Style, StyleName, Styles};
//!
//! fn main() -> mdview::Result<()> {
//!     let styles = Styles::new().with(StyleName::HeadingLevel(1), Style::new().with_property("fontSize", 32));
//!     let view = MarkdownView::new()
//!         .with_styles(styles)
//!         .with_viewport(390.0, 844.0)
//!         .with_link_handler(|target| println!("open {}", target));
//!
//!     let element = view.render_json(r#"[
//!         {"type": "heading", "level": 1, "content": "Hello"},
//!         {"type": "paragraph", "content": [{"type": "text", "content": "world"}]}
//!     ]"#)?;
//!     assert_eq!(element.plain_text(), "Helloworld");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Closed node set**: unknown node types fail loudly at the JSON boundary
//! - **Paragraph disambiguation**: standalone images and leading embeds render as blocks
//! - **Embed sizing**: iframe markup is rewritten to fill the viewport at its aspect ratio
//! - **Table styling**: parity, header, last-row and last-column style fragments
//! - **Visitors**: replace, rewrite or skip nodes before they are rendered

pub mod element;
pub mod error;
pub mod model;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use element::{Element, LinkHandler, Size};
pub use error::{Error, Result};
pub use model::{Content, Node, NodeKind};
pub use render::{
    render_node, JsonFormat, NodeVisitor, Output, RenderState, Renderer, Viewport, VisitorAction,
};
pub use style::{Style, StyleList, StyleName, Styles};

use serde_json::Value;

/// Parse a JSON document tree (an array of nodes or a single node).
///
/// Every `type` tag is checked against the dispatch table first, so an
/// unknown node type is reported as [`Error::UnsupportedNodeType`].
///
/// # Example
///
/// ```
/// use mdview::{parse_nodes, Error};
///
/// let nodes = parse_nodes(r#"[{"type": "hr"}]"#).unwrap();
/// assert_eq!(nodes.len(), 1);
///
/// let err = parse_nodes(r#"[{"type": "spoiler", "content": "x"}]"#).unwrap_err();
/// assert!(matches!(err, Error::UnsupportedNodeType(_)));
/// ```
pub fn parse_nodes(json: &str) -> Result<Vec<Node>> {
    let value: Value = serde_json::from_str(json)?;
    check_node_types(&value)?;
    let nodes = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(nodes)
}

fn check_node_types(value: &Value) -> Result<()> {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(kind)) = map.get("type") {
                render::lookup(kind)?;
            }
            map.values().try_for_each(check_node_types)
        }
        Value::Array(items) => items.iter().try_for_each(check_node_types),
        _ => Ok(()),
    }
}

/// Builder for rendering markdown trees.
///
/// # Example
///
/// ```
/// use mdview::{MarkdownView, Node};
/// use mdview::render::SkipImagesVisitor;
///
/// let element = MarkdownView::new()
///     .with_visitor(SkipImagesVisitor)
///     .render(&[Node::image("a.png"), Node::paragraph("caption")]);
/// assert_eq!(element.as_fragment().map(|c| c.len()), Some(1));
/// ```
pub struct MarkdownView {
    styles: Styles,
    state: RenderState,
    visitor: Option<Box<dyn NodeVisitor>>,
}

impl MarkdownView {
    /// Create a new builder with no styles and the default viewport.
    pub fn new() -> Self {
        Self {
            styles: Styles::default(),
            state: RenderState::default(),
            visitor: None,
        }
    }

    /// Set the style map.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Set the container dimensions used to size embeds.
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.state = self.state.with_viewport(Viewport::new(width, height));
        self
    }

    /// Set the link activation callback.
    pub fn with_link_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.state = self.state.with_link_handler(handler);
        self
    }

    /// Set the visitor consulted before each node is rendered.
    pub fn with_visitor<V: NodeVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Some(Box::new(visitor));
        self
    }

    /// Get the style map.
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Get the seed render state.
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Render a sequence of top-level nodes.
    pub fn render(&self, nodes: &[Node]) -> Element {
        let renderer = Renderer::new(&self.styles);
        let renderer = match &self.visitor {
            Some(visitor) => renderer.with_visitor(visitor.as_ref()),
            None => renderer,
        };
        renderer.render(nodes, &self.state)
    }

    /// Parse a JSON document tree and render it.
    pub fn render_json(&self, json: &str) -> Result<Element> {
        let nodes = parse_nodes(json)?;
        Ok(self.render(&nodes))
    }
}

impl Default for MarkdownView {
    fn default() -> Self {
        Self::new()
    }
}
