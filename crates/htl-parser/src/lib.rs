//! Parser for htl, a compact S-expression notation for a restricted HTML subset.
//!
//! `(tag :attrKey attrValue "text" (child ...))` parses into a tree that
//! renders as `<tag attrKey="attrValue">text<child></child></tag>`.
//!
//! # Scope
//!
//! This crate implements:
//! - **State machine** - a single pass over the input, one character at a
//!   time, across seven lexical contexts
//! - **Escaping** - backslash escapes and HTML escaping inside quoted strings
//! - **Tree building** - a bounded stack of open elements under a synthetic
//!   root
//!
//! # Not Implemented
//!
//! - Streaming input; the whole document must be in memory
//! - Error recovery; the first error aborts the parse
//! - Validation of tags or attributes

/// Parser entry point and errors.
pub mod parser;
/// The character-driven state machine.
pub mod tokenizer;

pub use parser::{ParseError, SyntaxErrorKind, parse};
pub use tokenizer::{Context, MAX_STACK_DEPTH, html_escape_char, unescape_then_html_escape};
