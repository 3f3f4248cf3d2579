//! Fenced code blocks (```` ``` lang ```` and `~~~ lang`).

use crate::limits::{CODE_INDENT, MIN_FENCE_LEN};
use crate::scanner::Scanner;
use crate::LexError;

use super::super::token::{InfoWords, Token};
use super::super::{BlockLexer, BlockRule, ParseContext};
use super::push_dedented_lines;

/// Recognizes a fenced code block and consumes it up to its closing
/// fence, or to the end of the range if it is never closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FenceRule;

/// A parsed opening fence line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenFence<'a> {
    /// The fence character (` or ~).
    marker: u8,
    /// Length of the opening marker run.
    len: usize,
    /// Trimmed info string.
    info: &'a str,
}

fn open_fence<'a>(ctx: &'a ParseContext<'_>, line: usize) -> Option<OpenFence<'a>> {
    let lines = ctx.lines();
    if line >= lines.len() || lines.indent(line) >= CODE_INDENT {
        return None;
    }

    let pos = lines.content_start(line);
    let max = lines.end(line);
    if pos + MIN_FENCE_LEN > max {
        return None;
    }

    let mut scanner = Scanner::new(ctx.src().as_bytes(), pos, max);
    let marker = match scanner.peek() {
        Some(b @ (b'`' | b'~')) => b,
        _ => return None,
    };

    let len = scanner.skip_run(marker);
    if len < MIN_FENCE_LEN {
        return None;
    }

    // Backticks in a backtick fence's info string would read as a code span
    let info = ctx.src()[scanner.offset()..max].trim();
    if marker == b'`' && info.contains('`') {
        return None;
    }

    Some(OpenFence { marker, len, info })
}

/// Closing fence: a run of the same marker at least as long as the
/// opening one, followed by nothing but spaces.
fn is_closing_fence(ctx: &ParseContext<'_>, line: usize, marker: u8, len: usize) -> bool {
    let lines = ctx.lines();
    let mut scanner = Scanner::new(
        ctx.src().as_bytes(),
        lines.content_start(line),
        lines.end(line),
    );

    if !scanner.at(marker) || scanner.skip_run(marker) < len {
        return false;
    }

    scanner.skip_spaces();
    scanner.is_eol()
}

impl BlockRule for FenceRule {
    fn name(&self) -> &'static str {
        "fence"
    }

    fn probe(&self, ctx: &ParseContext<'_>, line: usize, _end: usize) -> bool {
        open_fence(ctx, line).is_some()
    }

    fn commit(
        &self,
        _lexer: &BlockLexer,
        ctx: &mut ParseContext<'_>,
        line: usize,
        end: usize,
    ) -> Result<bool, LexError> {
        let Some(open) = open_fence(ctx, line) else {
            return Ok(false);
        };

        let mut close = line + 1;
        while close < end && !is_closing_fence(ctx, close, open.marker, open.len) {
            close += 1;
        }

        let info_words: InfoWords = open.info.split_whitespace().map(str::to_owned).collect();
        let mut content = String::new();
        push_dedented_lines(ctx, line + 1, close, ctx.lines().indent(line), &mut content);

        ctx.push(Token::Fence {
            info_words,
            content,
        });
        // Unclosed fences end with the range
        ctx.set_cursor((close + 1).min(end));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn lex(input: &str) -> Vec<Token> {
        let mut ctx = ParseContext::new(input, &Options::default());
        let end = ctx.line_count();
        BlockLexer::new().tokenize(&mut ctx, 0, end).unwrap();
        ctx.into_tokens()
    }

    fn fence(info: &[&str], content: &str) -> Token {
        Token::Fence {
            info_words: info.iter().map(|s| s.to_string()).collect(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_code_fence_backticks() {
        assert_eq!(lex("```\ncode\n```"), vec![fence(&[], "code\n")]);
    }

    #[test]
    fn test_code_fence_tildes() {
        assert_eq!(lex("~~~\ncode\n~~~"), vec![fence(&[], "code\n")]);
    }

    #[test]
    fn test_code_fence_with_info() {
        assert_eq!(lex("```js\ncode\n```"), vec![fence(&["js"], "code\n")]);
    }

    #[test]
    fn test_code_fence_info_words() {
        assert_eq!(
            lex("```  rust   no_run \nx\n```"),
            vec![fence(&["rust", "no_run"], "x\n")]
        );
    }

    #[test]
    fn test_code_fence_other_marker_does_not_close() {
        assert_eq!(
            lex("```\nfoo\n~~~\nbar\n```"),
            vec![fence(&[], "foo\n~~~\nbar\n")]
        );
    }

    #[test]
    fn test_code_fence_longer_closing() {
        let mut ctx = ParseContext::new("```\ncode\n`````\nafter", &Options::default());
        BlockLexer::new().tokenize(&mut ctx, 0, 4).unwrap();
        assert_eq!(ctx.tokens()[0], fence(&[], "code\n"));
        assert_eq!(ctx.tokens()[1], Token::ParagraphOpen);
    }

    #[test]
    fn test_code_fence_shorter_closing_invalid() {
        assert_eq!(lex("````\ncode\n```"), vec![fence(&[], "code\n```")]);
    }

    #[test]
    fn test_code_fence_closing_with_trailing_text_invalid() {
        assert_eq!(lex("```\na\n``` x\n```"), vec![fence(&[], "a\n``` x\n")]);
    }

    #[test]
    fn test_code_fence_closing_trailing_spaces() {
        assert_eq!(lex("```\na\n```   \n"), vec![fence(&[], "a\n")]);
    }

    #[test]
    fn test_code_fence_no_closing() {
        assert_eq!(lex("```\ncode"), vec![fence(&[], "code")]);
        assert_eq!(lex("```\ncode\n\n"), vec![fence(&[], "code\n\n")]);
    }

    #[test]
    fn test_code_fence_unclosed_stops_at_range_end() {
        let mut ctx = ParseContext::new("```\na\nb\nc", &Options::default());
        BlockLexer::new().tokenize(&mut ctx, 0, 2).unwrap();
        assert_eq!(ctx.tokens(), [fence(&[], "a\n")]);
        assert_eq!(ctx.cursor(), 2);
    }

    #[test]
    fn test_code_fence_empty() {
        assert_eq!(lex("```\n```"), vec![fence(&[], "")]);
    }

    #[test]
    fn test_code_fence_preserves_content() {
        assert_eq!(
            lex("```\n  indented \n    more\n```"),
            vec![fence(&[], "  indented \n    more\n")]
        );
    }

    #[test]
    fn test_code_fence_indent_removed_from_content() {
        assert_eq!(
            lex("  ```\n  a\n    b\n c\nd\n  ```"),
            vec![fence(&[], "a\n  b\nc\nd\n")]
        );
    }

    #[test]
    fn test_code_fence_two_backticks_invalid() {
        let tokens = lex("``\ncode\n``");
        assert_eq!(tokens[0], Token::ParagraphOpen);
    }

    #[test]
    fn test_code_fence_backtick_in_info_invalid() {
        let tokens = lex("```rust`extra\ncode\n```");
        assert_eq!(tokens[0], Token::ParagraphOpen);
    }

    #[test]
    fn test_code_fence_backtick_in_tilde_info_allowed() {
        assert_eq!(lex("~~~ a`b\nx\n~~~"), vec![fence(&["a`b"], "x\n")]);
    }

    #[test]
    fn test_code_fence_interrupts_paragraph() {
        let tokens = lex("text\n```\ncode\n```");
        assert_eq!(tokens[2], Token::ParagraphClose);
        assert_eq!(tokens[3], fence(&[], "code\n"));
    }

    #[test]
    fn test_probe_does_not_consume() {
        let ctx = ParseContext::new("```\ncode", &Options::default());
        assert!(FenceRule.probe(&ctx, 0, 2));
        assert!(!FenceRule.probe(&ctx, 1, 2));
        assert_eq!(ctx.cursor(), 0);
        assert!(ctx.tokens().is_empty());
    }
}
