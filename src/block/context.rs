//! Mutable state threaded through one block lexing pass.

use std::borrow::Cow;

use crate::{LexError, LineIndex, Options};

use super::token::{ListKind, Token};

/// Stable handle to an emitted list open token.
///
/// Looseness is only known after every item of a list has been lexed,
/// so the list rule keeps this handle and patches the token afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListHandle(usize);

/// Block lexer state: source text, its line index, the line cursor and
/// the growing token sequence.
///
/// A root context is created per document. List items get their own
/// context through [`ParseContext::clone_for`], which owns a fresh text
/// buffer and index and shares nothing with the parent.
#[derive(Debug)]
pub struct ParseContext<'a> {
    src: Cow<'a, str>,
    lines: LineIndex,
    cursor: usize,
    tokens: Vec<Token>,
    tight: bool,
    depth: usize,
    max_nesting: usize,
}

impl<'a> ParseContext<'a> {
    /// Create a root context, indexing `src`.
    pub fn new(src: impl Into<Cow<'a, str>>, options: &Options) -> Self {
        let src = src.into();
        let lines = LineIndex::new(&src);
        Self::with_index(src, lines, options)
    }

    /// Create a root context from a caller-supplied line index.
    ///
    /// The index must have been built over `src`.
    pub fn with_index(src: impl Into<Cow<'a, str>>, lines: LineIndex, options: &Options) -> Self {
        Self {
            src: src.into(),
            lines,
            cursor: 0,
            tokens: Vec::new(),
            tight: true,
            depth: 0,
            max_nesting: options.max_nesting,
        }
    }

    /// Create an independent context over `text`, one nesting level deeper.
    ///
    /// The new context starts at line 0 with no tokens and `tight` set.
    pub fn clone_for(&self, text: String) -> Result<ParseContext<'static>, LexError> {
        let depth = self.depth + 1;
        if depth > self.max_nesting {
            log::debug!(
                "nesting depth {depth} exceeds limit {}, aborting",
                self.max_nesting
            );
            return Err(LexError::RecursionLimitExceeded {
                depth,
                limit: self.max_nesting,
            });
        }

        let lines = LineIndex::new(&text);
        log::debug!("nested context at depth {depth} over {} lines", lines.len());
        Ok(ParseContext {
            src: Cow::Owned(text),
            lines,
            cursor: 0,
            tokens: Vec::new(),
            tight: true,
            depth,
            max_nesting: self.max_nesting,
        })
    }

    /// The text being lexed.
    #[inline]
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Line index over [`src`](Self::src).
    #[inline]
    pub fn lines(&self) -> &LineIndex {
        &self.lines
    }

    /// Number of indexed lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of `line`, excluding the line terminator.
    #[inline]
    pub fn line_text(&self, line: usize) -> &str {
        &self.src[self.lines.start(line)..self.lines.end(line)]
    }

    /// Check if `line` is blank (or past the end).
    #[inline]
    pub fn is_blank(&self, line: usize) -> bool {
        self.lines.is_blank(line)
    }

    /// Next line to process.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the line cursor.
    #[inline]
    pub fn set_cursor(&mut self, line: usize) {
        self.cursor = line;
    }

    /// Nesting depth; 0 for the root context.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `false` once a rule reported loose content in this context.
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.tight
    }

    /// Report loose content to the caller.
    #[inline]
    pub fn set_loose(&mut self) {
        self.tight = false;
    }

    /// Tokens emitted so far.
    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the context, returning its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Append a tight list open token and return a handle to it.
    pub fn open_list(&mut self, kind: ListKind) -> ListHandle {
        let handle = ListHandle(self.tokens.len());
        self.tokens.push(kind.open_token());
        handle
    }

    /// Patch a previously opened list to loose.
    pub fn mark_loose(&mut self, handle: ListHandle) {
        match &mut self.tokens[handle.0] {
            Token::BulletListOpen { tight } | Token::OrderedListOpen { tight, .. } => {
                *tight = false;
            }
            other => debug_assert!(false, "list handle points at {other:?}"),
        }
    }

    /// Move every token of a finished nested context into this one.
    pub fn append_tokens(&mut self, nested: ParseContext<'_>) {
        self.tokens.extend(nested.tokens);
    }
}
