//! Block-level lexer for Markdown.
//!
//! The lexer is line-oriented. A dispatcher tries each block rule in a
//! fixed priority order on the current line:
//! - Indented code
//! - Fenced code blocks
//! - Thematic breaks
//! - Lists
//! - ATX headings
//! - Paragraphs (fallback)
//!
//! The list rule re-enters the dispatcher for every item, on a cloned
//! context holding the item's dedented lines followed by the rest of the
//! document.

mod context;
mod lexer;
mod rules;
mod token;

pub use context::{ListHandle, ParseContext};
pub use lexer::BlockLexer;
pub use rules::{CodeRule, FenceRule, HeadingRule, ListRule, ParagraphRule, ThematicBreakRule};
pub use token::{InfoWords, ListKind, Token};

use crate::LexError;

/// A block rule that the dispatcher can try on a line.
///
/// Rules have two entry points. [`probe`](Self::probe) answers whether
/// the rule would match at `line` and must not mutate anything; it is
/// used for lookahead, e.g. to decide where a paragraph ends.
/// [`commit`](Self::commit) either returns `Ok(false)` leaving the
/// context untouched, or pushes its tokens and moves the context cursor
/// strictly past `line` (never beyond `end`).
pub trait BlockRule: Send + Sync {
    /// Short rule name used in log output.
    fn name(&self) -> &'static str;

    /// Whether a match of this rule ends an open paragraph.
    fn interrupts_paragraph(&self) -> bool {
        true
    }

    /// Check whether the rule matches at `line` without consuming input.
    fn probe(&self, ctx: &ParseContext<'_>, line: usize, end: usize) -> bool;

    /// Match at `line` and consume input up to at most `end`.
    fn commit(
        &self,
        lexer: &BlockLexer,
        ctx: &mut ParseContext<'_>,
        line: usize,
        end: usize,
    ) -> Result<bool, LexError>;
}
