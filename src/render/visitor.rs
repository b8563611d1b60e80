//! Visitor pattern for customizing document rendering.
//!
//! The driver consults a visitor before dispatching each node, so callers
//! can replace, rewrite or drop nodes without touching the renderers.
//!
//! # Example
//!
//! ```
//! use mdview::element::Element;
//! use mdview::model::Node;
//! use mdview::render::{NodeVisitor, RenderState, VisitorAction};
//!
//! struct HideTables;
//!
//! impl NodeVisitor for HideTables {
//!     fn visit_node(&self, node: &Node, _state: &RenderState) -> VisitorAction {
//!         match node {
//!             Node::Table(_) => VisitorAction::Replace(Element::placeholder()),
//!             _ => VisitorAction::Continue,
//!         }
//!     }
//! }
//! ```

use crate::element::Element;
use crate::model::{HeadingNode, Node};

use super::RenderState;

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the node with a ready-made element.
    Replace(Element),

    /// Render this node instead of the visited one.
    Rewrite(Node),

    /// Skip this node entirely (produce no element).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the node should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action leaves rendering untouched.
    pub fn is_continue(&self) -> bool {
        matches!(self, VisitorAction::Continue)
    }

    /// Get the replacement element if available.
    pub fn replacement(&self) -> Option<&Element> {
        match self {
            VisitorAction::Replace(element) => Some(element),
            _ => None,
        }
    }
}

/// Trait for visiting nodes before they are rendered.
///
/// Visitors are shared by every render call, so they only get `&self`.
pub trait NodeVisitor: Send + Sync {
    /// Called before rendering a node.
    ///
    /// # Arguments
    /// * `node` - The node about to be rendered
    /// * `state` - The state it will be rendered with
    ///
    /// # Returns
    /// Action indicating how to handle this node
    fn visit_node(&self, node: &Node, state: &RenderState) -> VisitorAction {
        let _ = (node, state);
        VisitorAction::Continue
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl NodeVisitor for DefaultVisitor {}

/// Visitor that drops images and embeds.
#[derive(Debug, Clone, Default)]
pub struct SkipImagesVisitor;

impl NodeVisitor for SkipImagesVisitor {
    fn visit_node(&self, node: &Node, _state: &RenderState) -> VisitorAction {
        match node {
            Node::Image(_) | Node::Iframe(_) => VisitorAction::Skip,
            _ => VisitorAction::Continue,
        }
    }
}

/// Visitor that limits heading depth.
#[derive(Debug, Clone)]
pub struct MaxHeadingLevelVisitor {
    max_level: u8,
}

impl MaxHeadingLevelVisitor {
    /// Create a visitor that limits headings to the specified max level.
    pub fn new(max_level: u8) -> Self {
        Self {
            max_level: max_level.clamp(1, 6),
        }
    }
}

impl NodeVisitor for MaxHeadingLevelVisitor {
    fn visit_node(&self, node: &Node, _state: &RenderState) -> VisitorAction {
        match node {
            Node::Heading(heading) if heading.level > self.max_level => {
                VisitorAction::Rewrite(Node::Heading(HeadingNode {
                    level: self.max_level,
                    content: heading.content.clone(),
                }))
            }
            _ => VisitorAction::Continue,
        }
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn NodeVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: NodeVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeVisitor for CompositeVisitor {
    fn visit_node(&self, node: &Node, state: &RenderState) -> VisitorAction {
        for visitor in &self.visitors {
            let action = visitor.visit_node(node, state);
            if !action.is_continue() {
                return action;
            }
        }
        VisitorAction::Continue
    }
}
