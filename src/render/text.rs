//! Text-like renderers: inline styles, headings, breaks, rules and links.

use crate::element::{Element, PressAction, TextContent, TextElement, ViewElement};
use crate::model::{Content, HeadingNode, InlineNode, LinkNode};
use crate::style::{StyleList, StyleName, Styles};

use super::{Output, RenderState};

/// Render `content` as text: raw strings directly, nested nodes via `output`.
pub(crate) fn text_content(content: &Content, output: &dyn Output, state: &RenderState) -> TextContent {
    match content {
        Content::Text(text) => TextContent::Raw(text.clone()),
        Content::Nodes(nodes) => TextContent::element(output.output(nodes, state)),
    }
}

/// Wrap content in a text container styled with `style`.
pub(crate) fn styled_text(
    content: &Content,
    style: StyleList,
    output: &dyn Output,
    state: &RenderState,
) -> Element {
    Element::Text(TextElement::new(
        state.key,
        style,
        text_content(content, output, state),
    ))
}

fn render_styled(
    name: StyleName,
    node: &InlineNode,
    output: &dyn Output,
    state: &RenderState,
    styles: &Styles,
) -> Element {
    styled_text(&node.content, StyleList::named(styles, name), output, state)
}

pub(crate) fn render_text(node: &InlineNode, output: &dyn Output, state: &RenderState, styles: &Styles) -> Element {
    render_styled(StyleName::Text, node, output, state, styles)
}

pub(crate) fn render_strong(node: &InlineNode, output: &dyn Output, state: &RenderState, styles: &Styles) -> Element {
    render_styled(StyleName::Strong, node, output, state, styles)
}

pub(crate) fn render_em(node: &InlineNode, output: &dyn Output, state: &RenderState, styles: &Styles) -> Element {
    render_styled(StyleName::Em, node, output, state, styles)
}

pub(crate) fn render_del(node: &InlineNode, output: &dyn Output, state: &RenderState, styles: &Styles) -> Element {
    render_styled(StyleName::Del, node, output, state, styles)
}

pub(crate) fn render_u(node: &InlineNode, output: &dyn Output, state: &RenderState, styles: &Styles) -> Element {
    render_styled(StyleName::U, node, output, state, styles)
}

pub(crate) fn render_inline_code(
    node: &InlineNode,
    output: &dyn Output,
    state: &RenderState,
    styles: &Styles,
) -> Element {
    render_styled(StyleName::InlineCode, node, output, state, styles)
}

pub(crate) fn render_code_block(
    node: &InlineNode,
    output: &dyn Output,
    state: &RenderState,
    styles: &Styles,
) -> Element {
    render_styled(StyleName::CodeBlock, node, output, state, styles)
}

pub(crate) fn render_block_quote(
    node: &InlineNode,
    output: &dyn Output,
    state: &RenderState,
    styles: &Styles,
) -> Element {
    render_styled(StyleName::BlockQuote, node, output, state, styles)
}

pub(crate) fn render_paragraph_text(
    node: &InlineNode,
    output: &dyn Output,
    state: &RenderState,
    styles: &Styles,
) -> Element {
    render_styled(StyleName::Paragraph, node, output, state, styles)
}

/// Headings share `heading` and add `heading<level>` on top.
pub(crate) fn render_heading(
    node: &HeadingNode,
    output: &dyn Output,
    state: &RenderState,
    styles: &Styles,
) -> Element {
    let style = StyleList::named(styles, StyleName::Heading)
        .and(styles, StyleName::HeadingLevel(node.level));
    styled_text(&node.content, style, output, state)
}

pub(crate) fn render_hr(state: &RenderState, styles: &Styles) -> Element {
    Element::View(ViewElement {
        key: state.key,
        style: StyleList::named(styles, StyleName::Hr),
        size: None,
        children: Vec::new(),
    })
}

pub(crate) fn render_br(state: &RenderState, styles: &Styles) -> Element {
    fixed_text("\n\n", StyleName::Br, state, styles)
}

pub(crate) fn render_newline(state: &RenderState, styles: &Styles) -> Element {
    fixed_text("\n", StyleName::Newline, state, styles)
}

fn fixed_text(text: &str, name: StyleName, state: &RenderState, styles: &Styles) -> Element {
    Element::Text(TextElement::new(
        state.key,
        StyleList::named(styles, name),
        TextContent::Raw(text.to_string()),
    ))
}

/// Links are pressable only when the state carries a link handler.
pub(crate) fn render_link(node: &LinkNode, output: &dyn Output, state: &RenderState, styles: &Styles) -> Element {
    let mut text = TextElement::new(
        state.key,
        StyleList::named(styles, StyleName::Link),
        text_content(&node.content, output, state),
    );
    text.on_press = state
        .link_handler
        .clone()
        .map(|handler| PressAction::new(node.target.clone(), handler));
    Element::Text(text)
}
