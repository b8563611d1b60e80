//! Rendering module for turning document nodes into visual elements.
//!
//! [`render_node`] is the dispatch table: an exhaustive match from node
//! type to renderer. A driver supplies the [`Output`] callback used for
//! recursion into children, so renderers never walk sequences themselves.

mod driver;
mod embed;
mod image;
mod json;
mod list;
mod paragraph;
mod table;
mod text;
pub mod visitor;

pub use driver::Renderer;
pub use embed::{transform_embed, EmbedLayout, EMBED_RELATIVE_SIZE};
pub use image::padded_size;
pub use json::{to_json, JsonFormat};
pub use list::DEFAULT_BULLET;
pub use table::{cell_styles, CellPosition};
pub use visitor::{
    CompositeVisitor, DefaultVisitor, MaxHeadingLevelVisitor, NodeVisitor, SkipImagesVisitor,
    VisitorAction,
};

use crate::element::{Element, LinkHandler};
use crate::error::Result;
use crate::model::{Node, NodeKind};
use crate::style::Styles;

/// Recursion callback supplied by the tree-walking driver.
pub trait Output {
    /// Render a sequence of sibling nodes.
    fn output(&self, nodes: &[Node], state: &RenderState) -> Element;

    /// Decide how a node is handled before it is dispatched.
    ///
    /// Renderers that hand a child straight to another renderer (a paragraph
    /// holding an image, say) ask here first so the driver's visitor still
    /// sees that child.
    fn visit(&self, node: &Node, state: &RenderState) -> VisitorAction {
        let _ = (node, state);
        VisitorAction::Continue
    }
}

impl<F> Output for F
where
    F: Fn(&[Node], &RenderState) -> Element,
{
    fn output(&self, nodes: &[Node], state: &RenderState) -> Element {
        self(nodes, state)
    }
}

/// Container dimensions used to size embedded content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Container width
    pub width: f32,
    /// Container height
    pub height: f32,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 375.0,
            height: 667.0,
        }
    }
}

/// Per-call context threaded through every renderer.
///
/// Never mutated in place: nested calls receive derived copies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    /// Rendering-position key of the node being rendered
    pub key: Option<usize>,

    /// Container dimensions
    pub viewport: Viewport,

    /// Link activation callback
    pub link_handler: Option<LinkHandler>,
}

impl RenderState {
    /// Create a state with the default viewport and no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a state for the node at `key`.
    pub fn with_key(&self, key: usize) -> Self {
        Self {
            key: Some(key),
            ..self.clone()
        }
    }

    /// Set the viewport and return self.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the link activation callback and return self.
    pub fn with_link_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.link_handler = Some(LinkHandler::new(handler));
        self
    }
}

/// Render one node with the renderer registered for its type.
pub fn render_node(
    node: &Node,
    output: &dyn Output,
    state: &RenderState,
    styles: &Styles,
) -> Element {
    match node {
        Node::Text(n) => text::render_text(n, output, state, styles),
        Node::Strong(n) => text::render_strong(n, output, state, styles),
        Node::Em(n) => text::render_em(n, output, state, styles),
        Node::Del(n) => text::render_del(n, output, state, styles),
        Node::U(n) => text::render_u(n, output, state, styles),
        Node::InlineCode(n) => text::render_inline_code(n, output, state, styles),
        Node::CodeBlock(n) => text::render_code_block(n, output, state, styles),
        Node::BlockQuote(n) => text::render_block_quote(n, output, state, styles),
        Node::Heading(n) => text::render_heading(n, output, state, styles),
        Node::Hr(_) => text::render_hr(state, styles),
        Node::Br(_) => text::render_br(state, styles),
        Node::Newline(_) => text::render_newline(state, styles),
        Node::Image(n) => image::render_image(n, state, styles),
        Node::Iframe(n) => embed::render_iframe(n, state),
        Node::Link(n) => text::render_link(n, output, state, styles),
        Node::List(n) => list::render_list(n, output, state, styles),
        Node::Table(n) => table::render_table(n, output, state, styles),
        Node::Paragraph(n) => paragraph::render_paragraph(n, output, state, styles),
    }
}

/// Render one node after consulting [`Output::visit`].
///
/// Returns `None` when the node is skipped.
pub(crate) fn render_visited(
    node: &Node,
    output: &dyn Output,
    state: &RenderState,
    styles: &Styles,
) -> Option<Element> {
    match output.visit(node, state) {
        VisitorAction::Continue => Some(render_node(node, output, state, styles)),
        VisitorAction::Replace(element) => {
            log::debug!("Visitor replaced {} node", node.kind());
            Some(element)
        }
        VisitorAction::Rewrite(rewritten) => {
            log::debug!("Visitor rewrote {} node as {}", node.kind(), rewritten.kind());
            Some(render_node(&rewritten, output, state, styles))
        }
        VisitorAction::Skip => {
            log::debug!("Visitor skipped {} node", node.kind());
            None
        }
    }
}

/// Look up a node-type identifier in the dispatch table.
pub fn lookup(identifier: &str) -> Result<NodeKind> {
    identifier.parse()
}

/// Check if a node-type identifier has a renderer.
pub fn supports(identifier: &str) -> bool {
    lookup(identifier).is_ok()
}
