//! List renderer.

use crate::element::{Element, TextContent, TextElement, ViewElement};
use crate::model::ListNode;
use crate::style::{Style, StyleList, StyleName, Styles};

use super::{Output, RenderState};

/// Bullet used when `listItemBullet` supplies no `content`.
pub const DEFAULT_BULLET: &str = "\u{2022}";

pub(crate) fn render_list(node: &ListNode, output: &dyn Output, state: &RenderState, styles: &Styles) -> Element {
    let bullet = styles
        .get(StyleName::ListItemBullet)
        .and_then(Style::content)
        .unwrap_or(DEFAULT_BULLET);

    let (marker_style, content_style) = if node.ordered {
        (StyleName::ListItemNumber, StyleName::ListItemOrderedContent)
    } else {
        (StyleName::ListItemBullet, StyleName::ListItemUnorderedContent)
    };

    let items = node
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = if node.ordered {
                format!("{}.", i + 1)
            } else {
                bullet.to_string()
            };
            Element::View(ViewElement {
                key: Some(i),
                style: StyleList::named(styles, StyleName::ListItem),
                size: None,
                children: vec![
                    Element::Text(TextElement::new(
                        None,
                        StyleList::named(styles, marker_style),
                        TextContent::Raw(marker),
                    )),
                    Element::Text(TextElement::new(
                        None,
                        StyleList::named(styles, content_style),
                        TextContent::element(output.output(item, state)),
                    )),
                ],
            })
        })
        .collect();

    Element::View(ViewElement {
        key: state.key,
        style: StyleList::named(styles, StyleName::List),
        size: None,
        children: items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;
    use crate::style::Style;

    fn echo(nodes: &[Node], _state: &RenderState) -> Element {
        Element::Text(TextElement::new(
            None,
            StyleList::new(),
            TextContent::Raw(nodes.iter().map(Node::plain_text).collect()),
        ))
    }

    fn markers(element: &Element) -> Vec<String> {
        element
            .as_view()
            .unwrap()
            .children
            .iter()
            .map(|item| {
                let marker = &item.as_view().unwrap().children[0];
                marker.as_text().unwrap().raw().unwrap_or_default().to_string()
            })
            .collect()
    }

    fn items(labels: &[&str]) -> Vec<Vec<Node>> {
        labels.iter().map(|l| vec![Node::text(*l)]).collect()
    }

    #[test]
    fn test_ordered_markers() {
        let list = ListNode::numbered(items(&["a", "b", "c"]));
        let element = render_list(&list, &echo, &RenderState::new(), &Styles::new());
        assert_eq!(markers(&element), vec!["1.", "2.", "3."]);
        assert_eq!(element.plain_text(), "1.a2.b3.c");
    }

    #[test]
    fn test_default_bullet() {
        let list = ListNode::bullet(items(&["a", "b"]));
        let element = render_list(&list, &echo, &RenderState::new(), &Styles::new());
        assert_eq!(markers(&element), vec![DEFAULT_BULLET, DEFAULT_BULLET]);
    }

    #[test]
    fn test_custom_bullet_from_style() {
        let styles = Styles::new().with(StyleName::ListItemBullet, Style::new().with_content("-"));
        let list = ListNode::bullet(items(&["a", "b"]));
        let element = render_list(&list, &echo, &RenderState::new(), &styles);
        assert_eq!(markers(&element), vec!["-", "-"]);
    }

    #[test]
    fn test_content_style_depends_on_kind() {
        let ordered_style = Style::new().with_property("marginLeft", 4);
        let unordered_style = Style::new().with_property("marginLeft", 8);
        let styles = Styles::new()
            .with(StyleName::ListItemOrderedContent, ordered_style.clone())
            .with(StyleName::ListItemUnorderedContent, unordered_style.clone());

        let content_style = |ordered: bool| {
            let list = ListNode {
                ordered,
                items: items(&["x"]),
            };
            let element = render_list(&list, &echo, &RenderState::new(), &styles);
            let item = element.as_view().unwrap().children[0].clone();
            let content = item.as_view().unwrap().children[1].clone();
            content.as_text().unwrap().style.clone()
        };

        assert_eq!(content_style(true).fragments(), &[ordered_style]);
        assert_eq!(content_style(false).fragments(), &[unordered_style]);
    }

    #[test]
    fn test_empty_list_renders_empty_container() {
        let element = render_list(&ListNode::default(), &echo, &RenderState::new().with_key(2), &Styles::new());
        let view = element.as_view().unwrap();
        assert_eq!(view.key, Some(2));
        assert!(view.children.is_empty());
    }
}
