//! DoS prevention constants.
//!
//! These limits keep pathological inputs from exhausting the call stack
//! or overflowing numeric marker values.

/// Default maximum nesting depth for list item contexts.
///
/// Every list item re-enters the block lexer through a cloned context, so
/// this bounds recursion depth. Exceeding it fails the lex with
/// [`LexError::RecursionLimitExceeded`](crate::LexError::RecursionLimitExceeded).
pub const MAX_BLOCK_NESTING: usize = 32;

/// Maximum digits in ordered list marker (prevents big-integer parsing)
pub const MAX_LIST_MARKER_DIGITS: usize = 9;

/// Minimum marker run for a fenced code block.
pub const MIN_FENCE_LEN: usize = 3;

/// Leading spaces at which a line becomes indented code.
pub const CODE_INDENT: usize = 4;

/// Maximum spaces after a list marker that still count as padding.
/// Wider gaps mean the item starts with indented code.
pub const MAX_LIST_PADDING: usize = 4;

/// Default tab stop used when normalizing input.
pub const DEFAULT_TAB_WIDTH: usize = 4;
