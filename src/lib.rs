//! ferroblock: block-structure lexer for CommonMark-family Markdown
//!
//! Turns document text into a flat, ordered sequence of block tokens
//! (fenced and indented code, lists, headings, thematic breaks,
//! paragraphs). Inline markup is left untouched for a later stage.
//!
//! # Design Principles
//! - Line-oriented: rules address the document through a [`LineIndex`]
//! - Flat output: container blocks are `*Open`/`*Close` token pairs
//! - Total grammar: unmatched syntax degrades, it never errors
//! - Bounded recursion: nesting deeper than [`Options::max_nesting`]
//!   fails with [`LexError::RecursionLimitExceeded`]
//!
//! # Example
//! ```
//! use ferroblock::Token;
//!
//! let tokens = ferroblock::tokenize("```js\ncode\n```").unwrap();
//! assert_eq!(tokens.len(), 1);
//! assert!(matches!(&tokens[0], Token::Fence { content, .. } if content == "code\n"));
//! ```

pub mod block;
pub mod error;
pub mod limits;
pub mod line_index;
pub mod normalize;
pub mod scanner;

// Re-export primary types
pub use block::{BlockLexer, BlockRule, ListHandle, ListKind, ParseContext, Token};
pub use error::LexError;
pub use line_index::LineIndex;

/// Lexing options.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Maximum list nesting depth before lexing fails.
    pub max_nesting: usize,
    /// Tab stop width used when expanding tabs.
    pub tab_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_nesting: limits::MAX_BLOCK_NESTING,
            tab_width: limits::DEFAULT_TAB_WIDTH,
        }
    }
}

/// Lex a document into block tokens.
///
/// This is the primary API for simple use cases.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with_options(input, &Options::default())
}

/// Lex a document into block tokens with options.
pub fn tokenize_with_options(input: &str, options: &Options) -> Result<Vec<Token>, LexError> {
    let text = normalize::normalize(input, options.tab_width);
    let mut ctx = ParseContext::new(text, options);
    let end = ctx.line_count();
    BlockLexer::new().tokenize(&mut ctx, 0, end)?;
    Ok(ctx.into_tokens())
}
