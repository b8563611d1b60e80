//! Paragraph renderer.
//!
//! Text containers cannot host block-level elements, so a paragraph that
//! is really an image or an embed is rendered as that element instead.

use crate::element::Element;
use crate::model::{InlineNode, Node};
use crate::style::Styles;

use super::{render_visited, text, Output, RenderState};

/// Block children go through [`Output::visit`] like any other node; a
/// skipped block leaves an empty fragment.
pub(crate) fn render_paragraph(
    node: &InlineNode,
    output: &dyn Output,
    state: &RenderState,
    styles: &Styles,
) -> Element {
    match node.content.nodes() {
        // Only the leading embed is rendered; siblings after it are dropped.
        Some([block @ Node::Image(_)] | [block @ Node::Iframe(_), ..]) => {
            render_visited(block, output, state, styles).unwrap_or(Element::Fragment {
                children: Vec::new(),
            })
        }
        _ => text::render_paragraph_text(node, output, state, styles),
    }
}
