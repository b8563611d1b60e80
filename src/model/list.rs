//! List types.

use super::Node;
use serde::{Deserialize, Serialize};

/// A list item: the nodes rendered after its marker.
pub type ListItem = Vec<Node>;

/// An ordered or unordered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListNode {
    /// Numbered (`1.`, `2.`, ...) instead of bulleted
    #[serde(default)]
    pub ordered: bool,

    /// Items in display order
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl ListNode {
    /// Create a bulleted list.
    pub fn bullet(items: Vec<ListItem>) -> Self {
        Self {
            ordered: false,
            items,
        }
    }

    /// Create a numbered list.
    pub fn numbered(items: Vec<ListItem>) -> Self {
        Self {
            ordered: true,
            items,
        }
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_constructors() {
        let bullet = ListNode::bullet(vec![vec![Node::text("a")]]);
        assert!(!bullet.ordered);
        assert_eq!(bullet.len(), 1);

        let numbered = ListNode::numbered(Vec::new());
        assert!(numbered.ordered);
        assert!(numbered.is_empty());
    }
}
