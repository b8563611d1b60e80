//! JSON export of rendered element trees, node trees and style maps.

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize an element tree for a platform bridge.
///
/// Also accepts node trees and [`Styles`](crate::style::Styles), which is
/// handy for snapshotting what a renderer was given. Link handlers are not
/// exported; a pressable text carries only its target.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    }
    .map_err(|e| Error::Render(format!("element export: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, LinkHandler, PressAction, TextContent, TextElement};
    use crate::model::Node;
    use crate::style::{Style, StyleList, StyleName, Styles};

    #[test]
    fn test_to_json_pretty() {
        let element = Element::Text(TextElement::new(
            Some(0),
            StyleList::new(),
            TextContent::Raw("Hello".into()),
        ));

        let json = to_json(&element, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"element\": \"text\""));
        assert!(json.contains("Hello"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&Element::placeholder(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert_eq!(json, r#"{"element":"view","style":[],"children":[]}"#);
    }

    #[test]
    fn test_press_action_exports_target_only() {
        let mut text = TextElement::new(None, StyleList::new(), TextContent::Raw("docs".into()));
        text.on_press = Some(PressAction::new("https://example.com", LinkHandler::new(|_| {})));

        let json = to_json(&Element::Text(text), JsonFormat::Compact).unwrap();
        assert!(json.contains(r#""onPress":{"target":"https://example.com"}"#));
    }

    #[test]
    fn test_node_tree_export_uses_type_tags() {
        let json = to_json(&[Node::hr(), Node::heading(2, "Title")], JsonFormat::Compact).unwrap();
        assert!(json.starts_with(r#"[{"type":"hr"}"#));
        assert!(json.contains(r#""type":"heading","level":2"#));
    }

    #[test]
    fn test_styles_export() {
        let styles = Styles::new().with(StyleName::ListItemBullet, Style::new().with_content("-"));
        let json = to_json(&styles, JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"listItemBullet":{"content":"-"}}"#);
    }
}
