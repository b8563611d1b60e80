//! Embedded-content renderer.
//!
//! The raw markup of an `iframe` embed is parsed leniently, its declared
//! dimensions are turned into an aspect ratio, and the frame is rewritten to
//! fill the container before being handed to a web-content host. Any failure
//! degrades to an empty placeholder so one bad embed never aborts the
//! surrounding document.

use std::borrow::Cow;
use std::ops::Range;

use once_cell::sync::Lazy;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use regex::Regex;

use crate::element::{Element, Size, ViewElement, WebViewElement, ANY_ORIGIN};
use crate::error::{Error, Result};
use crate::model::IframeNode;
use crate::style::{Style, StyleList};

use super::{RenderState, Viewport};

/// Relative size written into the frame's `width` and `height`.
pub const EMBED_RELATIVE_SIZE: &str = "98%";

/// Centering wrappers around embeds, opening or closing.
static CENTER_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?center\s*>").unwrap());

/// Result of transforming embed markup.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedLayout {
    /// Rewritten markup for the web-content host
    pub html: String,

    /// Declared height / width of the frame, when both were declared
    pub aspect_ratio: Option<f32>,

    /// Container size for the host
    pub size: Size,
}

/// Parse and rewrite embed markup for a container of `viewport` size.
///
/// The first `iframe` is rewritten to the relative size. Markup without one
/// has its first element declaring a `width` or `height` rewritten instead,
/// but only a frame contributes an aspect ratio.
///
/// The container spans the full viewport width. Its height follows the
/// frame's aspect ratio when one is declared, otherwise half the viewport
/// height.
pub fn transform_embed(markup: &str, viewport: Viewport) -> Result<EmbedLayout> {
    let markup = CENTER_TAG.replace_all(markup, "");

    let (html, aspect_ratio) = match find_sized_tag(&markup)? {
        Some(tag) => {
            let mut html = String::with_capacity(markup.len());
            html.push_str(&markup[..tag.span.start]);
            html.push_str(&tag.rewritten());
            html.push_str(&markup[tag.span.end..]);
            (html, tag.aspect_ratio())
        }
        None => (markup.into_owned(), None),
    };

    let height = match aspect_ratio {
        Some(ratio) => {
            log::debug!("Embed aspect ratio {}", ratio);
            viewport.width * ratio
        }
        None => {
            log::debug!("Embed declares no aspect ratio, using half the viewport height");
            viewport.height / 2.0
        }
    };

    Ok(EmbedLayout {
        html,
        aspect_ratio,
        size: Size::new(viewport.width, height),
    })
}

/// A web-content host sized for the embed, or an empty placeholder.
pub(crate) fn render_iframe(node: &IframeNode, state: &RenderState) -> Element {
    let layout = embed_markup(node).and_then(|markup| transform_embed(&markup, state.viewport));
    match layout {
        Ok(layout) => {
            let mut host_style = StyleList::new();
            host_style.push(Style::new().with_property("flex", 1));
            Element::View(ViewElement {
                key: state.key,
                style: StyleList::new(),
                size: Some(layout.size),
                children: vec![Element::WebView(WebViewElement {
                    html: layout.html,
                    origin_whitelist: vec![ANY_ORIGIN.to_string()],
                    style: host_style,
                })],
            })
        }
        Err(err) => {
            log::warn!("Failed to render embed: {}", err);
            Element::placeholder()
        }
    }
}

/// The node's markup, or a frame built from its declared source and size.
fn embed_markup(node: &IframeNode) -> Result<Cow<'_, str>> {
    if !node.html.trim().is_empty() {
        return Ok(Cow::Borrowed(&node.html));
    }

    let target = node
        .target
        .as_deref()
        .ok_or_else(|| Error::Embed("embed has neither markup nor target".to_string()))?;

    let mut html = format!(r#"<iframe src="{}""#, quick_xml::escape::escape(target));
    if let Some(width) = node.width {
        html.push_str(&format!(r#" width="{}""#, width));
    }
    if let Some(height) = node.height {
        html.push_str(&format!(r#" height="{}""#, height));
    }
    html.push_str("></iframe>");
    Ok(Cow::Owned(html))
}

/// The start tag chosen for the size rewrite.
#[derive(Debug)]
struct SizedTag {
    name: String,
    span: Range<usize>,
    self_closing: bool,
    is_frame: bool,
    /// Names and raw (still escaped) values, in source order
    attributes: Vec<(String, String)>,
}

impl SizedTag {
    fn read(tag: &BytesStart<'_>, span: Range<usize>, self_closing: bool) -> Result<Self> {
        let name = std::str::from_utf8(tag.name().as_ref())
            .map_err(|e| Error::Embed(format!("tag name decode: {}", e)))?
            .to_string();

        let mut attributes = Vec::new();
        for attr in tag.html_attributes() {
            let attr = attr.map_err(|e| Error::Embed(format!("attribute: {}", e)))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| Error::Embed(format!("attribute name decode: {}", e)))?;
            let raw = std::str::from_utf8(&attr.value)
                .map_err(|e| Error::Embed(format!("attribute value decode: {}", e)))?;
            attributes.push((key.to_string(), raw.to_string()));
        }

        Ok(Self {
            is_frame: name.eq_ignore_ascii_case("iframe"),
            name,
            span,
            self_closing,
            attributes,
        })
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn has_dimension(&self) -> bool {
        self.attributes.iter().any(|(key, _)| is_dimension(key))
    }

    fn aspect_ratio(&self) -> Option<f32> {
        if !self.is_frame {
            return None;
        }
        let width = parse_dimension(self.attribute("width")?)?;
        let height = parse_dimension(self.attribute("height")?)?;
        Some(height / width)
    }

    /// The start tag with `width`/`height` replaced. Other attributes keep
    /// their raw values and order.
    fn rewritten(&self) -> String {
        let mut tag = format!("<{}", self.name);
        for (key, value) in &self.attributes {
            tag.push(' ');
            tag.push_str(key);
            let value = if is_dimension(key) {
                EMBED_RELATIVE_SIZE
            } else {
                value.as_str()
            };
            if !value.is_empty() {
                let quote = if value.contains('"') { '\'' } else { '"' };
                tag.push('=');
                tag.push(quote);
                tag.push_str(value);
                tag.push(quote);
            }
        }
        tag.push_str(if self.self_closing { "/>" } else { ">" });
        tag
    }
}

fn is_dimension(key: &str) -> bool {
    key.eq_ignore_ascii_case("width") || key.eq_ignore_ascii_case("height")
}

fn parse_dimension(value: &str) -> Option<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn position(reader: &Reader<&[u8]>) -> Result<usize> {
    usize::try_from(reader.buffer_position()).map_err(|e| Error::Embed(e.to_string()))
}

/// Parse the whole markup, returning the first frame tag, or failing that
/// the first tag that declares a dimension.
///
/// End-tag mismatches are tolerated; syntax errors anywhere fail the parse.
fn find_sized_tag(markup: &str) -> Result<Option<SizedTag>> {
    let mut reader = Reader::from_str(markup);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut frame: Option<SizedTag> = None;
    let mut fallback: Option<SizedTag> = None;
    loop {
        let start = position(&reader)?;
        let (tag, self_closing) = match reader.read_event() {
            Ok(Event::Start(tag)) => (tag, false),
            Ok(Event::Empty(tag)) => (tag, true),
            Ok(Event::Eof) => break,
            Ok(_) => continue,
            Err(err) => {
                return Err(Error::Embed(format!(
                    "malformed markup near byte {}: {}",
                    start, err
                )))
            }
        };
        if frame.is_some() {
            continue;
        }

        let end = position(&reader)?;
        let found = SizedTag::read(&tag, start..end, self_closing)?;
        if found.is_frame {
            frame = Some(found);
        } else if fallback.is_none() && found.has_dimension() {
            fallback = Some(found);
        }
    }
    Ok(frame.or(fallback))
}
