//! Visual element tree produced by the renderers.
//!
//! Elements mirror the platform primitives the renderers target: styled
//! text, plain containers, images, a web-content host and a
//! grid/row/cell table. The tree is plain data; a platform bridge walks it
//! (or its JSON export) to build native views.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::style::StyleList;

/// Wildcard origin accepted by embedded web content.
pub const ANY_ORIGIN: &str = "*";

/// A rendered visual element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "element", rename_all = "camelCase")]
pub enum Element {
    /// Styled text container
    Text(TextElement),
    /// Generic container
    View(ViewElement),
    /// Image sourced from a URI
    Image(ImageElement),
    /// Web-content host
    WebView(WebViewElement),
    /// Table grid
    Grid(GridElement),
    /// Sibling elements without a container of their own
    Fragment {
        /// Children in order
        children: Vec<Element>,
    },
}

impl Element {
    /// Create an empty placeholder container.
    pub fn placeholder() -> Self {
        Element::View(ViewElement::default())
    }

    /// Get the rendering-position key, if any.
    pub fn key(&self) -> Option<usize> {
        match self {
            Element::Text(e) => e.key,
            Element::View(e) => e.key,
            Element::Grid(e) => e.key,
            Element::Image(_) | Element::WebView(_) | Element::Fragment { .. } => None,
        }
    }

    /// Get the text element, if this is one.
    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            Element::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the container, if this is one.
    pub fn as_view(&self) -> Option<&ViewElement> {
        match self {
            Element::View(view) => Some(view),
            _ => None,
        }
    }

    /// Get the grid, if this is one.
    pub fn as_grid(&self) -> Option<&GridElement> {
        match self {
            Element::Grid(grid) => Some(grid),
            _ => None,
        }
    }

    /// Get the fragment children, if this is a fragment.
    pub fn as_fragment(&self) -> Option<&[Element]> {
        match self {
            Element::Fragment { children } => Some(children),
            _ => None,
        }
    }

    /// Check if this is a fragment with no children.
    pub fn is_empty_fragment(&self) -> bool {
        matches!(self, Element::Fragment { children } if children.is_empty())
    }

    /// Trigger the primary interaction of a pressable text element.
    ///
    /// Returns `true` when a handler was invoked.
    pub fn press(&self) -> bool {
        match self {
            Element::Text(TextElement {
                on_press: Some(action),
                ..
            }) => {
                action.invoke();
                true
            }
            _ => false,
        }
    }

    /// Get all raw text in this element and its descendants.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Element::Text(text) => match &text.content {
                TextContent::Raw(raw) => out.push_str(raw),
                TextContent::Children(children) => {
                    for child in children {
                        child.collect_text(out);
                    }
                }
            },
            Element::View(view) => {
                for child in &view.children {
                    child.collect_text(out);
                }
            }
            Element::Grid(grid) => {
                for cell in grid.rows.iter().flat_map(|row| &row.cells) {
                    cell.content.collect_text(out);
                }
            }
            Element::Fragment { children } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Element::Image(_) | Element::WebView(_) => {}
        }
    }
}

/// Content hosted by a text container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextContent {
    /// Raw string
    Raw(String),
    /// Recursively rendered children
    Children(Vec<Element>),
}

impl TextContent {
    /// Wrap one rendered element as text content.
    pub fn element(element: Element) -> Self {
        TextContent::Children(vec![element])
    }
}

/// A styled text container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    /// Rendering-position key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<usize>,

    /// Applied style fragments
    pub style: StyleList,

    /// Hosted content
    pub content: TextContent,

    /// Primary interaction, for activation-aware text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<PressAction>,
}

impl TextElement {
    /// Create a non-interactive text container.
    pub fn new(key: Option<usize>, style: StyleList, content: TextContent) -> Self {
        Self {
            key,
            style,
            content,
            on_press: None,
        }
    }

    /// Get the raw string, if the content is not nested.
    pub fn raw(&self) -> Option<&str> {
        match &self.content {
            TextContent::Raw(raw) => Some(raw),
            TextContent::Children(_) => None,
        }
    }
}

/// A generic container.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewElement {
    /// Rendering-position key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<usize>,

    /// Applied style fragments
    pub style: StyleList,

    /// Computed size, overriding the style's own sizing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    /// Child elements
    pub children: Vec<Element>,
}

/// An image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageElement {
    /// Source URI
    pub source: String,

    /// Applied style fragments
    pub style: StyleList,
}

/// A host for embedded web content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebViewElement {
    /// Markup loaded into the host
    pub html: String,

    /// Origins the host accepts content from
    pub origin_whitelist: Vec<String>,

    /// Applied style fragments
    pub style: StyleList,
}

/// A table grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridElement {
    /// Rendering-position key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<usize>,

    /// Applied style fragments
    pub style: StyleList,

    /// Rows, header first
    pub rows: Vec<RowElement>,
}

/// A grid row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowElement {
    /// 1-based row number
    pub id: usize,

    /// Cells in column order
    pub cells: Vec<CellElement>,
}

/// A grid cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellElement {
    /// 1-based row number
    pub row_id: usize,

    /// 1-based column number
    pub id: usize,

    /// Accumulated cell style fragments
    pub style: StyleList,

    /// Cell content (a text container carrying the content styles)
    pub content: Box<Element>,
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Create a new size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Callback receiving the target of an activated link.
#[derive(Clone)]
pub struct LinkHandler(Arc<dyn Fn(&str) + Send + Sync>);

impl LinkHandler {
    /// Wrap a callback.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self(Arc::new(handler))
    }

    /// Forward a link target to the callback.
    pub fn call(&self, target: &str) {
        (self.0)(target)
    }
}

impl fmt::Debug for LinkHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LinkHandler(..)")
    }
}

impl PartialEq for LinkHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Primary interaction of a link: forwards `target` to `handler`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressAction {
    /// Link target
    pub target: String,

    #[serde(skip)]
    handler: LinkHandler,
}

impl PressAction {
    /// Bind a target to a handler.
    pub fn new(target: impl Into<String>, handler: LinkHandler) -> Self {
        Self {
            target: target.into(),
            handler,
        }
    }

    /// Invoke the handler with the bound target.
    pub fn invoke(&self) {
        self.handler.call(&self.target);
    }
}
