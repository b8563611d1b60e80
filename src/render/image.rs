//! Image renderer.

use crate::element::{Element, ImageElement, Size, ViewElement};
use crate::model::ImageNode;
use crate::style::{Style, StyleList, StyleName, Styles};

use super::RenderState;

/// Size of a wrapper holding content of `width` x `height` with `style` padding.
///
/// Per-edge padding wins over the symmetric `padding` for that edge only.
pub fn padded_size(width: f32, height: f32, style: &Style) -> Size {
    let (left, right, top, bottom) = style.edge_padding();
    Size::new(width + left + right, height + top + bottom)
}

/// Wrapper container holding the image. A declared width or height sizes the
/// wrapper; a missing dimension counts as 0.
pub(crate) fn render_image(node: &ImageNode, state: &RenderState, styles: &Styles) -> Element {
    let wrapper_style = styles.get(StyleName::ImageWrapper);
    let size = node.has_declared_size().then(|| {
        let default_style = Style::default();
        padded_size(
            node.width.unwrap_or(0.0),
            node.height.unwrap_or(0.0),
            wrapper_style.unwrap_or(&default_style),
        )
    });

    Element::View(ViewElement {
        key: state.key,
        style: StyleList::named(styles, StyleName::ImageWrapper),
        size,
        children: vec![Element::Image(ImageElement {
            source: node.target.clone(),
            style: StyleList::named(styles, StyleName::Image),
        })],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapper_size(node: &ImageNode, wrapper: Style) -> Option<Size> {
        let styles = Styles::new().with(StyleName::ImageWrapper, wrapper);
        let element = render_image(node, &RenderState::new(), &styles);
        element.as_view().unwrap().size
    }

    #[test]
    fn test_symmetric_padding() {
        let node = ImageNode::new("a.png").with_size(100.0, 50.0);
        assert_eq!(
            wrapper_size(&node, Style::new().with_padding(10.0)),
            Some(Size::new(120.0, 70.0))
        );
    }

    #[test]
    fn test_edge_padding_overrides_for_that_edge() {
        let node = ImageNode::new("a.png").with_size(100.0, 50.0);
        let style = Style::new().with_padding(10.0).with_property("paddingLeft", 5.0);
        assert_eq!(wrapper_size(&node, style), Some(Size::new(115.0, 70.0)));
    }

    #[test]
    fn test_no_declared_size_uses_base_style() {
        let node = ImageNode::new("a.png");
        assert_eq!(wrapper_size(&node, Style::new().with_padding(10.0)), None);
    }

    #[test]
    fn test_missing_wrapper_style_means_no_padding() {
        let node = ImageNode::new("a.png").with_size(100.0, 50.0);
        let element = render_image(&node, &RenderState::new(), &Styles::new());
        let view = element.as_view().unwrap();
        assert_eq!(view.size, Some(Size::new(100.0, 50.0)));
        assert!(view.style.is_empty());
    }

    #[test]
    fn test_single_declared_dimension() {
        let mut node = ImageNode::new("a.png");
        node.width = Some(80.0);
        assert_eq!(
            wrapper_size(&node, Style::new().with_padding(4.0)),
            Some(Size::new(88.0, 8.0))
        );
    }

    #[test]
    fn test_image_source() {
        let node = ImageNode::new("https://example.com/cat.png");
        let element = render_image(&node, &RenderState::new().with_key(4), &Styles::new());
        let view = element.as_view().unwrap();
        assert_eq!(view.key, Some(4));
        match &view.children[..] {
            [Element::Image(image)] => assert_eq!(image.source, "https://example.com/cat.png"),
            other => panic!("Expected a single image, got {:?}", other),
        }
    }
}
