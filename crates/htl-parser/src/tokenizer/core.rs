use htl_dom::ElementData;
use strum_macros::Display;

use super::escape::{html_escape_char, unescape_then_html_escape};
use crate::parser::SyntaxErrorKind;

/// Maximum number of frames on the open-element stack, synthetic root included.
pub const MAX_STACK_DEPTH: usize = 256;

pub(crate) const OPEN_PAREN: char = '(';
pub(crate) const CLOSE_PAREN: char = ')';
pub(crate) const QUOTE: char = '"';
pub(crate) const ESCAPE: char = '\\';
pub(crate) const KEYWORD_START: char = ':';
pub(crate) const COMMENT_START: char = ';';
pub(crate) const NEWLINE: char = '\n';

/// The lexical context. Decides what a completed token means and how the
/// next character is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Context {
    /// Between nodes, or after a closing paren or a content string.
    Default,
    /// Reading the tag name right after `(`.
    Tag,
    /// After a tag name, attribute value or bare content token. `:` is legal here.
    AfterTag,
    /// Reading an attribute key after `:`.
    AttrKey,
    /// After an attribute key, waiting for its value.
    AfterAttrKey,
    /// Reading an attribute value, bare or quoted.
    AttrValue,
    /// Reading content text, bare or quoted.
    Content,
}

/// The behavior that consumes the next character.
///
/// The current eater is itself part of the state: every step returns the
/// eater for the following character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Eater {
    /// Whitespace between tokens.
    Idle,
    /// An unquoted token.
    Symbol,
    /// Inside a double-quoted literal.
    String,
    /// A `;` comment, up to and including the line break.
    Comment,
}

/// Mutable context for a single parse. Never outlives the call to
/// [`parse`](crate::parse).
#[derive(Debug)]
pub(crate) struct ParseState {
    pub(crate) context: Context,
    pub(crate) eater: Eater,
    /// Token being accumulated.
    pub(crate) token: String,
    /// Attribute key awaiting its value.
    pub(crate) key: String,
    /// A backslash was just read inside a quoted string.
    pub(crate) escaping: bool,
    /// Open elements. The bottom frame is the synthetic root and is never popped.
    pub(crate) stack: Vec<ElementData>,
}

impl ParseState {
    /// Fresh state with the synthetic root already on the stack.
    pub(crate) fn new() -> Self {
        Self {
            context: Context::Default,
            eater: Eater::Idle,
            token: String::new(),
            key: String::new(),
            escaping: false,
            stack: vec![ElementData::new("")],
        }
    }

    /// Feed one character to the current eater and install the eater it returns.
    pub(crate) fn eat(&mut self, c: char) -> Result<(), SyntaxErrorKind> {
        self.eater = match self.eater {
            Eater::Idle => self.eat_idle(c)?,
            Eater::Symbol => self.eat_symbol(c)?,
            Eater::String => self.eat_string(c),
            Eater::Comment => eat_comment(c),
        };
        Ok(())
    }

    fn eat_idle(&mut self, c: char) -> Result<Eater, SyntaxErrorKind> {
        match c {
            OPEN_PAREN => {
                if self.context == Context::AfterAttrKey {
                    return Err(SyntaxErrorKind::UnexpectedOpenParen);
                }
                self.push()
            }
            CLOSE_PAREN => {
                if self.context == Context::AfterAttrKey {
                    return Err(SyntaxErrorKind::UnexpectedCloseParen);
                }
                self.pop()
            }
            QUOTE => {
                self.context = if self.context == Context::AfterAttrKey {
                    Context::AttrValue
                } else {
                    Context::Content
                };
                Ok(Eater::String)
            }
            COMMENT_START => Ok(Eater::Comment),
            KEYWORD_START => {
                if self.context != Context::AfterTag {
                    return Err(SyntaxErrorKind::UnexpectedCharacter);
                }
                self.context = Context::AttrKey;
                Ok(Eater::Symbol)
            }
            ESCAPE => Err(SyntaxErrorKind::EscapeOutsideString),
            c if c.is_whitespace() => Ok(Eater::Idle),
            c => {
                self.token.push(c);
                self.context = if self.context == Context::AfterAttrKey {
                    Context::AttrValue
                } else {
                    Context::Content
                };
                Ok(Eater::Symbol)
            }
        }
    }

    fn eat_symbol(&mut self, c: char) -> Result<Eater, SyntaxErrorKind> {
        match c {
            OPEN_PAREN => {
                if self.context == Context::AttrKey {
                    return Err(SyntaxErrorKind::UnexpectedOpenParen);
                }
                self.commit();
                self.push()
            }
            CLOSE_PAREN => {
                if self.context == Context::AttrKey {
                    return Err(SyntaxErrorKind::UnexpectedCloseParen);
                }
                self.commit();
                self.pop()
            }
            QUOTE => {
                self.commit();
                self.context = if self.context == Context::AttrKey {
                    Context::AttrValue
                } else {
                    Context::Content
                };
                Ok(Eater::String)
            }
            ESCAPE => Err(SyntaxErrorKind::EscapeOutsideString),
            c if c.is_whitespace() => {
                self.commit();
                self.context = if self.context == Context::AttrKey {
                    Context::AfterAttrKey
                } else {
                    Context::AfterTag
                };
                Ok(Eater::Idle)
            }
            // Bare tokens are copied through without any escaping.
            c => {
                self.token.push(c);
                Ok(Eater::Symbol)
            }
        }
    }

    fn eat_string(&mut self, c: char) -> Eater {
        if self.escaping {
            self.escaping = false;
            unescape_then_html_escape(&mut self.token, c);
            return Eater::String;
        }
        match c {
            QUOTE => {
                self.commit();
                self.context = if self.context == Context::AttrValue {
                    Context::AfterTag
                } else {
                    Context::Default
                };
                Eater::Idle
            }
            ESCAPE => {
                self.escaping = true;
                Eater::String
            }
            c => {
                html_escape_char(&mut self.token, c);
                Eater::String
            }
        }
    }
}

/// Comments leave the lexical context untouched.
const fn eat_comment(c: char) -> Eater {
    if c == NEWLINE { Eater::Idle } else { Eater::Comment }
}
