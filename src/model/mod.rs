//! Document model types for markdown syntax trees.
//!
//! This module defines the tagged union of nodes a markdown parser hands to
//! the renderers. Every variant carries only the fields its renderer reads.

mod list;
mod media;
mod node;
mod table;

pub use list::{ListItem, ListNode};
pub use media::{IframeNode, ImageNode};
pub use node::{Content, EmptyNode, HeadingNode, InlineNode, LinkNode, Node, NodeKind};
pub use table::{TableCell, TableNode};
