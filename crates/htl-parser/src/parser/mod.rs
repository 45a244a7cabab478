//! Parser entry point.

/// `parse` and the per-character driver loop.
pub mod core;
/// Parse errors.
pub mod error;

pub use self::core::parse;
pub use error::{ParseError, SyntaxErrorKind};
