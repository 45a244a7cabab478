use thiserror::Error;

use crate::tokenizer::Context;

/// The diagnostic staged by the state machine when it rejects a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// `(` where an attribute key or value was expected.
    #[error("unexpected open paren")]
    UnexpectedOpenParen,
    /// `)` where an attribute key or value was expected.
    #[error("unexpected close paren")]
    UnexpectedCloseParen,
    /// `)` with no open element left to close.
    #[error("unexpected closing paren")]
    UnbalancedCloseParen,
    /// `:` anywhere but right after a tag name or attribute value.
    #[error("unexpected character")]
    UnexpectedCharacter,
    /// `\` outside a quoted string.
    #[error("backslash-escaping is not allowed here")]
    EscapeOutsideString,
    /// Nesting beyond [`MAX_STACK_DEPTH`](crate::MAX_STACK_DEPTH) frames.
    #[error("tree too deep")]
    TreeTooDeep,
}

/// A failed parse. Every error is terminal for its input; no partial tree is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The state machine rejected a character.
    #[error(
        "error processing character {character:?} (line {line} column {column}) in {context} context: {kind}"
    )]
    Syntax {
        /// The offending character.
        character: char,
        /// 1-based line of the character.
        line: usize,
        /// Column after the character; 0 right after a line break.
        column: usize,
        /// Lexical context when the character was rejected.
        context: Context,
        /// What went wrong.
        kind: SyntaxErrorKind,
    },
    /// The input ended inside a quoted string.
    #[error("unterminated string at end of input (line {line} column {column})")]
    UnterminatedString {
        /// Line of the last character.
        line: usize,
        /// Column of the last character.
        column: usize,
    },
    /// The input ended with elements still open.
    #[error(
        "parser stack contains more than the root element, perhaps {missing} closing parens are missing?"
    )]
    MissingClosingParens {
        /// Number of unclosed elements.
        missing: usize,
    },
}

impl ParseError {
    /// True if the document nests deeper than the stack allows.
    #[must_use]
    pub const fn is_depth_exceeded(&self) -> bool {
        matches!(
            self,
            Self::Syntax {
                kind: SyntaxErrorKind::TreeTooDeep,
                ..
            }
        )
    }

    /// Line and column of the error, when it points at a character.
    #[must_use]
    pub const fn position(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Syntax { line, column, .. } | Self::UnterminatedString { line, column } => {
                Some((line, column))
            }
            Self::MissingClosingParens { .. } => None,
        }
    }
}
