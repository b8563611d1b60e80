//! Style schema and lookup.
//!
//! A [`Styles`] map is supplied by the caller and read by name. Renderers
//! never fail on a missing entry: an absent fragment simply contributes
//! nothing to the element's [`StyleList`].

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A style fragment.
///
/// Properties are kept as the caller wrote them. The few the renderers
/// read (`padding`, `paddingLeft/Right/Top/Bottom`, `content`) are looked
/// up on demand, so a value of an unexpected shape such as `"5%"` is
/// passed through to the platform and ignored for sizing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    /// Platform properties, keyed by their camelCase names
    pub properties: BTreeMap<String, Value>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set symmetric padding and return self.
    pub fn with_padding(self, padding: f32) -> Self {
        self.with_property("padding", padding)
    }

    /// Set a platform property and return self.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Set custom marker content and return self.
    pub fn with_content(self, content: impl Into<String>) -> Self {
        self.with_property("content", content.into())
    }

    /// Get a raw property.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Get a property as a number, if it is one.
    pub fn number(&self, name: &str) -> Option<f32> {
        self.get(name)
            .and_then(Value::as_f64)
            .map(|v| v as f32)
            .filter(|v| v.is_finite())
    }

    /// Custom marker text (read from `listItemBullet`).
    pub fn content(&self) -> Option<&str> {
        self.get("content").and_then(Value::as_str)
    }

    /// Overlay `other` on top of this style. Values set in `other` win.
    pub fn merge(&mut self, other: &Style) {
        for (name, value) in &other.properties {
            self.properties.insert(name.clone(), value.clone());
        }
    }

    /// Effective padding per edge as (left, right, top, bottom).
    ///
    /// A numeric per-edge value takes precedence over `padding`, which
    /// defaults to 0. Non-numeric values count as absent.
    pub fn edge_padding(&self) -> (f32, f32, f32, f32) {
        let base = self.number("padding").unwrap_or(0.0);
        (
            self.number("paddingLeft").unwrap_or(base),
            self.number("paddingRight").unwrap_or(base),
            self.number("paddingTop").unwrap_or(base),
            self.number("paddingBottom").unwrap_or(base),
        )
    }
}

/// Every style key the renderers look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleName {
    Text,
    Strong,
    Em,
    Del,
    U,
    InlineCode,
    CodeBlock,
    BlockQuote,
    Paragraph,
    Heading,
    /// Level-specific heading style (`heading1`, `heading2`, ...)
    HeadingLevel(u8),
    Br,
    Newline,
    Hr,
    Link,
    ImageWrapper,
    Image,
    List,
    ListItem,
    ListItemNumber,
    /// Bullet marker; its `content` replaces the default bullet glyph
    ListItemBullet,
    ListItemOrderedContent,
    ListItemUnorderedContent,
    Table,
    TableCell,
    TableCellContent,
    TableCellEvenRow,
    TableCellContentEvenRow,
    TableCellOddRow,
    TableCellContentOddRow,
    TableCellEvenColumn,
    TableCellContentEvenColumn,
    TableCellOddColumn,
    TableCellContentOddColumn,
    TableHeaderCell,
    TableHeaderCellContent,
    TableCellLastRow,
    TableCellContentLastRow,
    TableCellLastColumn,
    TableCellContentLastColumn,
}

impl StyleName {
    /// Get the key this style is stored under.
    pub fn key(&self) -> Cow<'static, str> {
        let key = match self {
            StyleName::HeadingLevel(level) => return Cow::Owned(format!("heading{}", level)),
            StyleName::Text => "text",
            StyleName::Strong => "strong",
            StyleName::Em => "em",
            StyleName::Del => "del",
            StyleName::U => "u",
            StyleName::InlineCode => "inlineCode",
            StyleName::CodeBlock => "codeBlock",
            StyleName::BlockQuote => "blockQuote",
            StyleName::Paragraph => "paragraph",
            StyleName::Heading => "heading",
            StyleName::Br => "br",
            StyleName::Newline => "newline",
            StyleName::Hr => "hr",
            StyleName::Link => "link",
            StyleName::ImageWrapper => "imageWrapper",
            StyleName::Image => "image",
            StyleName::List => "list",
            StyleName::ListItem => "listItem",
            StyleName::ListItemNumber => "listItemNumber",
            StyleName::ListItemBullet => "listItemBullet",
            StyleName::ListItemOrderedContent => "listItemOrderedContent",
            StyleName::ListItemUnorderedContent => "listItemUnorderedContent",
            StyleName::Table => "table",
            StyleName::TableCell => "tableCell",
            StyleName::TableCellContent => "tableCellContent",
            StyleName::TableCellEvenRow => "tableCellEvenRow",
            StyleName::TableCellContentEvenRow => "tableCellContentEvenRow",
            StyleName::TableCellOddRow => "tableCellOddRow",
            StyleName::TableCellContentOddRow => "tableCellContentOddRow",
            StyleName::TableCellEvenColumn => "tableCellEvenColumn",
            StyleName::TableCellContentEvenColumn => "tableCellContentEvenColumn",
            StyleName::TableCellOddColumn => "tableCellOddColumn",
            StyleName::TableCellContentOddColumn => "tableCellContentOddColumn",
            StyleName::TableHeaderCell => "tableHeaderCell",
            StyleName::TableHeaderCellContent => "tableHeaderCellContent",
            StyleName::TableCellLastRow => "tableCellLastRow",
            StyleName::TableCellContentLastRow => "tableCellContentLastRow",
            StyleName::TableCellLastColumn => "tableCellLastColumn",
            StyleName::TableCellContentLastColumn => "tableCellContentLastColumn",
        };
        Cow::Borrowed(key)
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Caller-supplied mapping from style name to fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Styles {
    entries: BTreeMap<String, Style>,
}

impl Styles {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a style map from a JSON object keyed by style name.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set a fragment and return self.
    pub fn with(mut self, name: StyleName, style: Style) -> Self {
        self.insert(name, style);
        self
    }

    /// Set a fragment.
    pub fn insert(&mut self, name: StyleName, style: Style) {
        self.entries.insert(name.key().into_owned(), style);
    }

    /// Look up a fragment. Missing entries resolve to `None`.
    pub fn get(&self, name: StyleName) -> Option<&Style> {
        self.entries.get(name.key().as_ref())
    }

    /// Layer these styles over `defaults`; entries here replace defaults per key.
    pub fn merged_over(&self, defaults: &Styles) -> Styles {
        let mut entries = defaults.entries.clone();
        for (name, style) in &self.entries {
            entries.insert(name.clone(), style.clone());
        }
        Styles { entries }
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no styles are defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered style fragments applied to one element.
///
/// Later fragments override earlier ones on conflicting properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleList(Vec<Style>);

impl StyleList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a single named fragment.
    pub fn named(styles: &Styles, name: StyleName) -> Self {
        let mut list = Self::new();
        list.push_named(styles, name);
        list
    }

    /// Append a named fragment if the map defines it.
    pub fn push_named(&mut self, styles: &Styles, name: StyleName) {
        if let Some(style) = styles.get(name) {
            self.0.push(style.clone());
        }
    }

    /// Append a fragment.
    pub fn push(&mut self, style: Style) {
        self.0.push(style);
    }

    /// Append a named fragment and return self.
    pub fn and(mut self, styles: &Styles, name: StyleName) -> Self {
        self.push_named(styles, name);
        self
    }

    /// Get the fragments in application order.
    pub fn fragments(&self) -> &[Style] {
        &self.0
    }

    /// Check if `style` is one of the fragments.
    pub fn contains(&self, style: &Style) -> bool {
        self.0.contains(style)
    }

    /// Check if no fragments apply.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge all fragments into one style, later ones winning.
    pub fn flatten(&self) -> Style {
        let mut merged = Style::default();
        for style in &self.0 {
            merged.merge(style);
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_json() {
        let styles = Styles::from_json(
            r##"{
                "imageWrapper": {"padding": 10, "paddingLeft": 5, "backgroundColor": "#eee"},
                "heading2": {"fontSize": 22}
            }"##,
        )
        .unwrap();

        let wrapper = styles.get(StyleName::ImageWrapper).unwrap();
        assert_eq!(wrapper.number("padding"), Some(10.0));
        assert_eq!(wrapper.number("paddingLeft"), Some(5.0));
        assert_eq!(wrapper.properties["backgroundColor"], "#eee");
        assert!(styles.get(StyleName::HeadingLevel(2)).is_some());
        assert!(styles.get(StyleName::HeadingLevel(3)).is_none());
    }

    #[test]
    fn test_missing_style_is_no_style() {
        let styles = Styles::new();
        let list = StyleList::named(&styles, StyleName::Link);
        assert!(list.is_empty());
        assert_eq!(list.flatten(), Style::default());
    }

    #[test]
    fn test_edge_padding_precedence() {
        let style = Style::new().with_padding(10.0).with_property("paddingLeft", 5);
        assert_eq!(style.edge_padding(), (5.0, 10.0, 10.0, 10.0));
        assert_eq!(Style::default().edge_padding(), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_non_numeric_padding_is_kept_but_not_sized() {
        let styles = Styles::from_json(
            r#"{
                "imageWrapper": {"padding": "5%", "paddingTop": 4},
                "link": {"color": "blue"}
            }"#,
        )
        .unwrap();

        let wrapper = styles.get(StyleName::ImageWrapper).unwrap();
        assert_eq!(wrapper.properties["padding"], "5%");
        assert_eq!(wrapper.number("padding"), None);
        assert_eq!(wrapper.edge_padding(), (0.0, 0.0, 4.0, 0.0));
        assert!(styles.get(StyleName::Link).is_some());
    }

    #[test]
    fn test_size_keys_are_plain_properties() {
        let style: Style = serde_json::from_str(r#"{"width": 120, "height": "auto"}"#).unwrap();
        assert_eq!(style.properties.len(), 2);
        assert_eq!(style.number("width"), Some(120.0));
        assert_eq!(style.get("height"), Some(&Value::from("auto")));
    }

    #[test]
    fn test_content_must_be_text() {
        let style = Style::new().with_property("content", 3);
        assert_eq!(style.content(), None);
        assert_eq!(Style::new().with_content("-").content(), Some("-"));
    }

    #[test]
    fn test_flatten_later_wins() {
        let styles = Styles::new()
            .with(StyleName::Heading, Style::new().with_property("fontSize", 16).with_property("color", "black"))
            .with(StyleName::HeadingLevel(1), Style::new().with_property("fontSize", 32));

        let flat = StyleList::named(&styles, StyleName::Heading)
            .and(&styles, StyleName::HeadingLevel(1))
            .flatten();
        assert_eq!(flat.properties["fontSize"], 32);
        assert_eq!(flat.properties["color"], "black");
    }

    #[test]
    fn test_merged_over_defaults() {
        let defaults = Styles::new()
            .with(StyleName::Link, Style::new().with_property("color", "blue"))
            .with(StyleName::Hr, Style::new().with_property("borderWidth", 1));
        let user = Styles::new().with(StyleName::Link, Style::new().with_property("color", "red"));

        let merged = user.merged_over(&defaults);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get(StyleName::Link).unwrap().properties["color"], "red");
    }

    #[test]
    fn test_style_name_keys() {
        assert_eq!(StyleName::HeadingLevel(4).key(), "heading4");
        assert_eq!(StyleName::TableCellContentLastColumn.to_string(), "tableCellContentLastColumn");
    }
}
