//! Input normalization applied before line indexing.
//!
//! The block rules only understand `\n` line endings and space
//! indentation, so carriage returns and tabs are rewritten up front.

use std::borrow::Cow;

/// Normalize line endings, expand tabs and replace NUL characters.
///
/// Returns the input unchanged (borrowed) when it contains none of
/// `\r`, `\t` or NUL.
///
/// # Example
/// ```
/// use ferroblock::normalize::normalize;
///
/// assert_eq!(normalize("a\r\n\tb", 4), "a\n    b");
/// ```
pub fn normalize(input: &str, tab_width: usize) -> Cow<'_, str> {
    if memchr::memchr3(b'\r', b'\t', 0, input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }

    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    let mut column = 0usize;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
                column = 0;
            }
            '\n' => {
                out.push('\n');
                column = 0;
            }
            '\t' => {
                let spaces = tab_width - column % tab_width;
                out.extend(std::iter::repeat_n(' ', spaces));
                column += spaces;
            }
            '\0' => {
                out.push('\u{FFFD}');
                column += 1;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_input_is_borrowed() {
        let out = normalize("- a\n- b\n", 4);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(normalize("a\r\nb\rc\n", 4), "a\nb\nc\n");
    }

    #[test]
    fn test_tab_at_line_start() {
        assert_eq!(normalize("\tcode", 4), "    code");
    }

    #[test]
    fn test_tab_after_text_goes_to_next_stop() {
        assert_eq!(normalize("a\tb", 4), "a   b");
        assert_eq!(normalize("abcd\tb", 4), "abcd    b");
    }

    #[test]
    fn test_tab_column_resets_per_line() {
        assert_eq!(normalize("ab\n\tc", 4), "ab\n    c");
    }

    #[test]
    fn test_custom_tab_width() {
        assert_eq!(normalize("\tx", 2), "  x");
    }

    #[test]
    fn test_nul_replaced() {
        assert_eq!(normalize("a\0b", 4), "a\u{FFFD}b");
    }
}
