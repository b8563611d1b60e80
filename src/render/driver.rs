//! Tree-walking driver.

use crate::element::Element;
use crate::model::Node;
use crate::style::Styles;

use super::visitor::{NodeVisitor, VisitorAction};
use super::{render_visited, Output, RenderState};

/// Renders node sequences through the dispatch table.
///
/// Each sibling is rendered with its 0-based index as the rendering-position
/// key. A visitor, when set, sees every node before it is dispatched.
/// Renderers that produce nothing (an empty fragment) leave no child.
pub struct Renderer<'a> {
    styles: &'a Styles,
    visitor: Option<&'a dyn NodeVisitor>,
}

impl<'a> Renderer<'a> {
    /// Create a driver over `styles`.
    pub fn new(styles: &'a Styles) -> Self {
        Self {
            styles,
            visitor: None,
        }
    }

    /// Set the visitor and return self.
    pub fn with_visitor(mut self, visitor: &'a dyn NodeVisitor) -> Self {
        self.visitor = Some(visitor);
        self
    }

    /// Render a document (a sequence of top-level nodes).
    pub fn render(&self, nodes: &[Node], state: &RenderState) -> Element {
        self.output(nodes, state)
    }
}

impl Output for Renderer<'_> {
    fn output(&self, nodes: &[Node], state: &RenderState) -> Element {
        let children = nodes
            .iter()
            .enumerate()
            .filter_map(|(i, node)| render_visited(node, self, &state.with_key(i), self.styles))
            .filter(|element| !element.is_empty_fragment())
            .collect();
        Element::Fragment { children }
    }

    fn visit(&self, node: &Node, state: &RenderState) -> VisitorAction {
        match self.visitor {
            Some(visitor) => visitor.visit_node(node, state),
            None => VisitorAction::Continue,
        }
    }
}
