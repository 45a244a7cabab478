//! Helper functions for the htl state machine.
//!
//! This module contains the operations that turn characters into tree
//! mutations:
//! - Stack operations ("push" on `(`, "pop" on `)`)
//! - Token commit, dispatched on the lexical context

use core::mem;

use htl_dom::{ElementData, Node};

use super::core::{Context, Eater, MAX_STACK_DEPTH, ParseState};
use crate::parser::SyntaxErrorKind;

// =============================================================================
// Stack Helpers
// =============================================================================

impl ParseState {
    /// Open a new element with an empty tag and start reading its tag name.
    pub(crate) fn push(&mut self) -> Result<Eater, SyntaxErrorKind> {
        if self.stack.len() >= MAX_STACK_DEPTH {
            return Err(SyntaxErrorKind::TreeTooDeep);
        }
        self.stack.push(ElementData::new(""));
        self.context = Context::Tag;
        Ok(Eater::Symbol)
    }

    /// Close the current element and attach it as the last child of its parent.
    ///
    /// The synthetic root is never popped.
    pub(crate) fn pop(&mut self) -> Result<Eater, SyntaxErrorKind> {
        if self.stack.len() <= 1 {
            return Err(SyntaxErrorKind::UnbalancedCloseParen);
        }
        if let Some(closed) = self.stack.pop() {
            self.current_element().append_child(Node::Element(closed));
        }
        self.context = Context::Default;
        Ok(Eater::Idle)
    }

    /// The element on top of the stack. The root frame keeps the stack non-empty.
    pub(crate) fn current_element(&mut self) -> &mut ElementData {
        let top = self.stack.len() - 1;
        &mut self.stack[top]
    }
}

// =============================================================================
// Token Helpers
// =============================================================================

impl ParseState {
    /// Take the accumulated token, leaving the buffer empty.
    pub(crate) fn flush_token(&mut self) -> String {
        mem::take(&mut self.token)
    }

    /// Apply the pending token to the tree according to the current context.
    ///
    /// Contexts without a pending token are a no-op.
    pub(crate) fn commit(&mut self) {
        match self.context {
            Context::Tag => {
                let tag = self.flush_token();
                self.current_element().tag_name = tag;
            }
            Context::AttrKey => {
                self.key = self.flush_token();
            }
            Context::AttrValue => {
                let key = mem::take(&mut self.key);
                let value = self.flush_token();
                self.current_element().set_attribute(key, value);
            }
            Context::Content => {
                let text = self.flush_token();
                self.current_element().append_child(Node::Text(text));
            }
            Context::Default | Context::AfterTag | Context::AfterAttrKey => {}
        }
    }
}
