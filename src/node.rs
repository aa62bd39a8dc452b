use crate::error::{Error, Result};

/// Ordered `key="value"` pairs. Values are written verbatim, without escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute, keeping insertion order.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a space-prefixed attribute string, or `""` when empty.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A node holding a text value and no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    tag: Option<String>,
    value: String,
    attrs: Attributes,
}

impl Leaf {
    /// Build a leaf. Fails when `value` is absent.
    pub fn new(tag: Option<&str>, value: Option<&str>) -> Result<Self> {
        let value = value.ok_or(Error::MissingValue)?;
        Ok(Self {
            tag: tag.map(str::to_string),
            value: value.to_string(),
            attrs: Attributes::new(),
        })
    }

    /// A tagless leaf, rendered as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    /// A tagged leaf.
    pub fn tagged(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn render(&self) -> String {
        match &self.tag {
            None => self.value.clone(),
            Some(tag) => format!("<{tag}{}>{}</{tag}>", self.attrs.to_html(), self.value),
        }
    }
}

/// A tagged node owning a non-empty, ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    tag: String,
    children: Vec<HtmlNode>,
    attrs: Attributes,
}

impl Parent {
    /// Build a parent. Fails when `tag` is absent or `children` is empty.
    pub fn new(tag: Option<&str>, children: Vec<HtmlNode>) -> Result<Self> {
        let tag = match tag {
            Some(tag) if !tag.is_empty() => tag.to_string(),
            _ => return Err(Error::MissingTag),
        };
        if children.is_empty() {
            return Err(Error::MissingChildren { tag });
        }
        Ok(Self {
            tag,
            children,
            attrs: Attributes::new(),
        })
    }

    pub fn with_attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn render(&self) -> Result<String> {
        // Re-checked here as well as in `new`.
        if self.tag.is_empty() {
            return Err(Error::MissingTag);
        }
        if self.children.is_empty() {
            return Err(Error::MissingChildren {
                tag: self.tag.clone(),
            });
        }

        let mut out = format!("<{}{}>", self.tag, self.attrs.to_html());
        for child in &self.children {
            out.push_str(&child.render()?);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        Ok(out)
    }
}

/// An HTML output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(Leaf),
    Parent(Parent),
}

impl HtmlNode {
    /// Render the tree depth-first into a markup string.
    pub fn render(&self) -> Result<String> {
        match self {
            HtmlNode::Leaf(leaf) => Ok(leaf.render()),
            HtmlNode::Parent(parent) => parent.render(),
        }
    }

    /// Shorthand for a parent node wrapped as `HtmlNode`.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Result<Self> {
        Parent::new(Some(tag), children).map(HtmlNode::Parent)
    }
}

impl From<Leaf> for HtmlNode {
    fn from(leaf: Leaf) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<Parent> for HtmlNode {
    fn from(parent: Parent) -> Self {
        HtmlNode::Parent(parent)
    }
}
