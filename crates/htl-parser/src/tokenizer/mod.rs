//! The htl state machine.
//!
//! Consumes one character at a time, mutating the parse state
//! and building the tree as tokens complete.

/// State machine core: lexical contexts and the eat dispatch.
pub mod core;
/// Escape tables for quoted strings.
pub mod escape;
/// Tree-building helpers: push, pop and token commit.
pub mod helpers;

pub use self::core::{Context, MAX_STACK_DEPTH};
pub use escape::{html_escape_char, unescape_then_html_escape};
