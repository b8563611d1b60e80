//! Image and embedded-frame nodes.

use serde::{Deserialize, Serialize};

/// An image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageNode {
    /// Image source URI
    pub target: String,

    /// Alternative text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Image title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Declared width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Declared height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl ImageNode {
    /// Create an image without declared dimensions.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            alt: None,
            title: None,
            width: None,
            height: None,
        }
    }

    /// Set declared dimensions and return self.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set alternative text and return self.
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Check if the image declares a width or a height.
    pub fn has_declared_size(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}

/// An embedded frame.
///
/// Parsers usually hand over the raw markup; a frame without markup is
/// built from its declared source and size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IframeNode {
    /// Raw source markup containing the `iframe` element
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub html: String,

    /// Frame source URI, when the parser extracted one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Declared width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Declared height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl IframeNode {
    /// Create an embed from raw markup.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            target: None,
            width: None,
            height: None,
        }
    }

    /// Create an embed from its source URI alone.
    pub fn from_target(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::default()
        }
    }

    /// Set declared dimensions and return self.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_declared_size() {
        let image = ImageNode::new("https://example.com/a.png");
        assert!(!image.has_declared_size());

        let sized = image.with_size(100.0, 50.0);
        assert!(sized.has_declared_size());
        assert_eq!(sized.width, Some(100.0));
    }

    #[test]
    fn test_image_optional_fields_default() {
        let image: ImageNode = serde_json::from_str(r#"{"target": "a.png"}"#).unwrap();
        assert_eq!(image, ImageNode::new("a.png"));
    }

    #[test]
    fn test_iframe_without_markup() {
        let frame: IframeNode =
            serde_json::from_str(r#"{"target": "https://v.example.com/1", "width": 640, "height": 360}"#).unwrap();
        assert!(frame.html.is_empty());
        assert_eq!(frame, IframeNode::from_target("https://v.example.com/1").with_size(640.0, 360.0));
    }
}
