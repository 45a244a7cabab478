//! Rendering of htl trees to HTML text.
//!
//! Rendering is a pure function of the tree. Values are emitted verbatim:
//! quoted strings were escaped once, at parse time, and bare tokens are
//! passed through untouched.

use core::fmt;

use crate::{ElementData, Node, is_void_tag};

/// Text payload rendered as a non-breaking space.
const NBSP_PLACEHOLDER: &str = "_";

/// Render an optional tree. An absent tree renders as the empty string.
#[must_use]
pub fn render(tree: Option<&Node>) -> String {
    tree.map(Node::render).unwrap_or_default()
}

impl Node {
    /// Render this node and its descendants to HTML.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Append the rendering of this node to `out`.
    ///
    /// A single buffer is threaded through the whole recursion.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Self::Text(payload) if payload == NBSP_PLACEHOLDER => out.push_str("&nbsp;"),
            Self::Text(payload) => out.push_str(payload),
            Self::Element(data) if data.is_anonymous() => render_children(data, out),
            Self::Element(data) => render_element(data, out),
        }
    }
}

fn render_children(data: &ElementData, out: &mut String) {
    for child in &data.children {
        child.render_into(out);
    }
}

fn render_element(data: &ElementData, out: &mut String) {
    out.push('<');
    out.push_str(&data.tag_name);

    let mut keys: Vec<&String> = data.attrs.keys().collect();
    keys.sort_unstable();
    for key in keys {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&data.attrs[key]);
        out.push('"');
    }

    if data.children.is_empty() {
        if is_void_tag(&data.tag_name) {
            out.push_str("/>");
        } else {
            out.push_str("></");
            out.push_str(&data.tag_name);
            out.push('>');
        }
        return;
    }

    out.push('>');
    render_children(data, out);
    out.push_str("</");
    out.push_str(&data.tag_name);
    out.push('>');
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
