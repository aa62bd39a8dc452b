use std::fmt;

use crate::error::{Error, Result};
use crate::node::{Attributes, Leaf};

/// Inline formatting kinds a span can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Text => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed fragment of inline text.
///
/// `url` is set for links and images only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl Span {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == SpanKind::Text
    }

    /// Convert to the HTML leaf for this kind of span.
    pub fn to_html_node(&self) -> Result<Leaf> {
        let leaf = match self.kind {
            SpanKind::Text => Leaf::text(&self.text),
            SpanKind::Bold => Leaf::tagged("b", &self.text),
            SpanKind::Italic => Leaf::tagged("i", &self.text),
            SpanKind::Code => Leaf::tagged("code", &self.text),
            SpanKind::Link => {
                let url = self.require_url()?;
                Leaf::tagged("a", &self.text).with_attrs([("href", url)].into_iter().collect())
            }
            SpanKind::Image => {
                let url = self.require_url()?;
                let mut attrs = Attributes::new();
                attrs.push("src", url);
                attrs.push("alt", &self.text);
                Leaf::tagged("img", "").with_attrs(attrs)
            }
        };
        Ok(leaf)
    }

    fn require_url(&self) -> Result<&str> {
        self.url.as_deref().ok_or(Error::InvalidSpan {
            kind: self.kind,
            reason: "missing url",
        })
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "Span({:?}, {}, {:?})", self.text, self.kind, url),
            None => write!(f, "Span({:?}, {}, None)", self.text, self.kind),
        }
    }
}
