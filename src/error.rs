//! Error type for block lexing.
//!
//! Block grammar is total: unmatched syntax degrades to a weaker block
//! kind instead of failing. The only fatal condition is nesting that
//! exceeds the configured depth.

use thiserror::Error;

/// Fatal block lexing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LexError {
    /// A nested list item context would exceed the nesting limit.
    #[error("block nesting depth {depth} exceeds the limit of {limit}")]
    RecursionLimitExceeded {
        /// Depth the nested context would have had.
        depth: usize,
        /// Configured maximum depth.
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = LexError::RecursionLimitExceeded { depth: 33, limit: 32 };
        assert_eq!(
            err.to_string(),
            "block nesting depth 33 exceeds the limit of 32"
        );
    }
}
