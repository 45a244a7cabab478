//! Tree model for htl documents.
//!
//! An htl document such as `(a :href foo "bar")` parses into a tree of
//! [`Node`]s and renders back to the restricted HTML subset
//! `<a href="foo">bar</a>`.
//!
//! # Design
//!
//! The tree is plainly owned: every [`ElementData`] owns its children, there
//! are no parent links and no sharing, so cycles cannot be built. The parser
//! appends nodes only to the element on top of its open-element stack, which
//! keeps insertion order intact.

use std::collections::HashMap;

use strum_macros::{Display, EnumString};

/// Serialization of trees back to HTML text.
pub mod serialize;

pub use serialize::render;

/// Map of attribute names to values for an element.
///
/// Keys are unique and the last write wins. Iteration order is irrelevant;
/// the serializer sorts keys before emitting them.
pub type AttributesMap = HashMap<String, String>;

/// A node of an htl tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A tag with attributes and ordered children.
    ///
    /// An element with an empty tag is an anonymous group: the synthetic
    /// document root, rendered as the plain concatenation of its children.
    Element(ElementData),
    /// Literal text. Always a leaf.
    Text(String),
}

/// Element-specific data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    /// The tag name. Empty for the anonymous root.
    pub tag_name: String,
    /// Attributes of the element.
    pub attrs: AttributesMap,
    /// Children in insertion order, owned exclusively by this element.
    pub children: Vec<Node>,
}

impl ElementData {
    /// Create an element with the given tag and no attributes or children.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
            children: Vec::new(),
        }
    }

    /// Returns the value of attribute `key` if present.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Set attribute `key` to `value`, replacing any earlier value.
    pub fn set_attribute(&mut self, key: String, value: String) {
        let _ = self.attrs.insert(key, value);
    }

    /// Append `child` as the last child of this element.
    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// True for the anonymous grouping element (empty tag).
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.tag_name.is_empty()
    }
}

impl Node {
    /// Create an element node with the given tag.
    #[must_use]
    pub fn element(tag_name: impl Into<String>) -> Self {
        Self::Element(ElementData::new(tag_name))
    }

    /// Create a text node holding `payload`.
    #[must_use]
    pub fn text(payload: impl Into<String>) -> Self {
        Self::Text(payload.into())
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementData> {
        match self {
            Self::Element(data) => Some(data),
            Self::Text(_) => None,
        }
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(payload) => Some(payload),
            Self::Element(_) => None,
        }
    }

    /// Children of this node. Text nodes have none.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(data) => &data.children,
            Self::Text(_) => &[],
        }
    }
}

impl From<ElementData> for Node {
    fn from(data: ElementData) -> Self {
        Self::Element(data)
    }
}

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements can't have any contents."
///
/// htl only recognises this subset; a childless element with one of these
/// tags renders as `<tag/>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum VoidTag {
    /// `<br/>`
    Br,
    /// `<hr/>`
    Hr,
    /// `<link/>`
    Link,
    /// `<img/>`
    Img,
    /// `<meta/>`
    Meta,
}

/// True if `tag_name` is one of the [`VoidTag`]s. Matching is exact.
#[must_use]
pub fn is_void_tag(tag_name: &str) -> bool {
    tag_name.parse::<VoidTag>().is_ok()
}
