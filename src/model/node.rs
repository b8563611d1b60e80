//! The document node tagged union.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{IframeNode, ImageNode, ListItem, ListNode, TableCell, TableNode};
use crate::error::{Error, Result};

/// One element of the parsed content tree.
///
/// Serialized with an internal `type` tag, so a parser emitting
/// `{"type": "heading", "level": 2, "content": "Intro"}` maps directly
/// onto [`Node::Heading`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// Plain text run
    Text(InlineNode),
    /// Bold text
    Strong(InlineNode),
    /// Emphasized text
    Em(InlineNode),
    /// Strikethrough text
    Del(InlineNode),
    /// Underlined text
    U(InlineNode),
    /// Inline code span
    InlineCode(InlineNode),
    /// Fenced or indented code block
    CodeBlock(InlineNode),
    /// Block quote
    BlockQuote(InlineNode),
    /// Section heading
    Heading(HeadingNode),
    /// Horizontal rule
    Hr(EmptyNode),
    /// Hard line break
    Br(EmptyNode),
    /// Soft newline between blocks
    Newline(EmptyNode),
    /// Image reference
    Image(ImageNode),
    /// Embedded frame (raw markup)
    Iframe(IframeNode),
    /// Hyperlink
    Link(LinkNode),
    /// Ordered or unordered list
    List(ListNode),
    /// Table with header row
    Table(TableNode),
    /// Paragraph of inline content
    Paragraph(InlineNode),
}

impl Node {
    /// Get the node-type identifier of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text(_) => NodeKind::Text,
            Node::Strong(_) => NodeKind::Strong,
            Node::Em(_) => NodeKind::Em,
            Node::Del(_) => NodeKind::Del,
            Node::U(_) => NodeKind::U,
            Node::InlineCode(_) => NodeKind::InlineCode,
            Node::CodeBlock(_) => NodeKind::CodeBlock,
            Node::BlockQuote(_) => NodeKind::BlockQuote,
            Node::Heading(_) => NodeKind::Heading,
            Node::Hr(_) => NodeKind::Hr,
            Node::Br(_) => NodeKind::Br,
            Node::Newline(_) => NodeKind::Newline,
            Node::Image(_) => NodeKind::Image,
            Node::Iframe(_) => NodeKind::Iframe,
            Node::Link(_) => NodeKind::Link,
            Node::List(_) => NodeKind::List,
            Node::Table(_) => NodeKind::Table,
            Node::Paragraph(_) => NodeKind::Paragraph,
        }
    }

    /// Create a text node.
    pub fn text(content: impl Into<Content>) -> Self {
        Node::Text(InlineNode::new(content))
    }

    /// Create a bold node.
    pub fn strong(content: impl Into<Content>) -> Self {
        Node::Strong(InlineNode::new(content))
    }

    /// Create an emphasis node.
    pub fn em(content: impl Into<Content>) -> Self {
        Node::Em(InlineNode::new(content))
    }

    /// Create an inline code node.
    pub fn inline_code(code: impl Into<String>) -> Self {
        Node::InlineCode(InlineNode::new(code.into()))
    }

    /// Create a code block node.
    pub fn code_block(code: impl Into<String>) -> Self {
        Node::CodeBlock(InlineNode::new(code.into()))
    }

    /// Create a paragraph node.
    pub fn paragraph(content: impl Into<Content>) -> Self {
        Node::Paragraph(InlineNode::new(content))
    }

    /// Create a heading node. Levels below 1 are raised to 1.
    pub fn heading(level: u8, content: impl Into<Content>) -> Self {
        Node::Heading(HeadingNode {
            level: level.max(1),
            content: content.into(),
        })
    }

    /// Create a horizontal rule.
    pub fn hr() -> Self {
        Node::Hr(EmptyNode::default())
    }

    /// Create a hard line break.
    pub fn br() -> Self {
        Node::Br(EmptyNode::default())
    }

    /// Create a newline.
    pub fn newline() -> Self {
        Node::Newline(EmptyNode::default())
    }

    /// Create an image node without declared dimensions.
    pub fn image(target: impl Into<String>) -> Self {
        Node::Image(ImageNode::new(target))
    }

    /// Create an embedded frame node from raw markup.
    pub fn iframe(html: impl Into<String>) -> Self {
        Node::Iframe(IframeNode::new(html))
    }

    /// Create a link node.
    pub fn link(target: impl Into<String>, content: impl Into<Content>) -> Self {
        Node::Link(LinkNode {
            target: target.into(),
            title: None,
            content: content.into(),
        })
    }

    /// Create a list node.
    pub fn list(ordered: bool, items: Vec<ListItem>) -> Self {
        Node::List(ListNode { ordered, items })
    }

    /// Create a table node.
    pub fn table(header: Vec<TableCell>, cells: Vec<Vec<TableCell>>) -> Self {
        Node::Table(TableNode { header, cells })
    }
}

/// Content of a text-like node: a raw string or nested nodes, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Raw text rendered as-is
    Text(String),
    /// Nested nodes rendered through the output callback
    Nodes(Vec<Node>),
}

impl Content {
    /// Get the nested nodes, if any.
    pub fn nodes(&self) -> Option<&[Node]> {
        match self {
            Content::Nodes(nodes) => Some(nodes),
            Content::Text(_) => None,
        }
    }

    /// Get plain text content, flattening nested nodes.
    pub fn plain_text(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Nodes(nodes) => nodes.iter().map(Node::plain_text).collect(),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Vec<Node>> for Content {
    fn from(nodes: Vec<Node>) -> Self {
        Content::Nodes(nodes)
    }
}

impl Node {
    /// Get plain text of this node and its descendants.
    pub fn plain_text(&self) -> String {
        match self {
            Node::Text(n)
            | Node::Strong(n)
            | Node::Em(n)
            | Node::Del(n)
            | Node::U(n)
            | Node::InlineCode(n)
            | Node::CodeBlock(n)
            | Node::BlockQuote(n)
            | Node::Paragraph(n) => n.content.plain_text(),
            Node::Heading(h) => h.content.plain_text(),
            Node::Link(l) => l.content.plain_text(),
            Node::Br(_) => "\n\n".to_string(),
            Node::Newline(_) => "\n".to_string(),
            Node::Image(img) => img.alt.clone().unwrap_or_default(),
            Node::Hr(_) | Node::Iframe(_) | Node::List(_) | Node::Table(_) => String::new(),
        }
    }
}

/// Payload of text-like nodes and paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineNode {
    /// Text or nested inline nodes
    pub content: Content,
}

impl InlineNode {
    /// Create a new inline node.
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A heading with its level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingNode {
    /// Heading level (1 = top)
    pub level: u8,

    /// Heading content
    pub content: Content,
}

/// Payload of nodes that carry no content (`hr`, `br`, `newline`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyNode {}

/// A hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkNode {
    /// Link destination forwarded to the activation handler
    pub target: String,

    /// Link title (tooltip)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Link text or nested nodes
    pub content: Content,
}

/// Node-type identifiers, one per renderer in the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Text,
    Strong,
    Em,
    Del,
    U,
    InlineCode,
    CodeBlock,
    BlockQuote,
    Heading,
    Hr,
    Br,
    Newline,
    Image,
    Iframe,
    Link,
    List,
    Table,
    Paragraph,
}

impl NodeKind {
    /// Every supported identifier.
    pub const ALL: [NodeKind; 18] = [
        NodeKind::Text,
        NodeKind::Strong,
        NodeKind::Em,
        NodeKind::Del,
        NodeKind::U,
        NodeKind::InlineCode,
        NodeKind::CodeBlock,
        NodeKind::BlockQuote,
        NodeKind::Heading,
        NodeKind::Hr,
        NodeKind::Br,
        NodeKind::Newline,
        NodeKind::Image,
        NodeKind::Iframe,
        NodeKind::Link,
        NodeKind::List,
        NodeKind::Table,
        NodeKind::Paragraph,
    ];

    /// Get the wire identifier (the `type` tag).
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Text => "text",
            NodeKind::Strong => "strong",
            NodeKind::Em => "em",
            NodeKind::Del => "del",
            NodeKind::U => "u",
            NodeKind::InlineCode => "inlineCode",
            NodeKind::CodeBlock => "codeBlock",
            NodeKind::BlockQuote => "blockQuote",
            NodeKind::Heading => "heading",
            NodeKind::Hr => "hr",
            NodeKind::Br => "br",
            NodeKind::Newline => "newline",
            NodeKind::Image => "image",
            NodeKind::Iframe => "iframe",
            NodeKind::Link => "link",
            NodeKind::List => "list",
            NodeKind::Table => "table",
            NodeKind::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NodeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnsupportedNodeType(s.to_string()))
    }
}
