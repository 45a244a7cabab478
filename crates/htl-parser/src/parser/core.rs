use htl_dom::Node;

use super::error::ParseError;
use crate::tokenizer::core::{Eater, NEWLINE, ParseState};

/// Parse an htl document.
///
/// Returns `Ok(None)` for empty input. Otherwise the tree is the synthetic
/// root: an element with an empty tag whose children are the top-level
/// nodes of the document.
///
/// ```
/// let tree = htl_parser::parse("(a :href foo \"bar\")").unwrap().unwrap();
/// assert_eq!(tree.render(), "<a href=\"foo\">bar</a>");
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] on the first rejected character, if the input
/// ends inside a quoted string, or if elements are left unclosed.
pub fn parse(input: &str) -> Result<Option<Node>, ParseError> {
    if input.is_empty() {
        return Ok(None);
    }

    let mut state = ParseState::new();
    let mut line = 1;
    let mut column = 0;
    for c in input.chars() {
        let step = state.eat(c);
        if c == NEWLINE {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
        if let Err(kind) = step {
            return Err(ParseError::Syntax {
                character: c,
                line,
                column,
                context: state.context,
                kind,
            });
        }
    }

    if state.eater == Eater::String {
        return Err(ParseError::UnterminatedString { line, column });
    }
    if state.stack.len() > 1 {
        return Err(ParseError::MissingClosingParens {
            missing: state.stack.len() - 1,
        });
    }
    Ok(state.stack.pop().map(Node::Element))
}
