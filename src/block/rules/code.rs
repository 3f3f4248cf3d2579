//! Indented code blocks.

use crate::limits::CODE_INDENT;
use crate::LexError;

use super::super::token::Token;
use super::super::{BlockLexer, BlockRule, ParseContext};
use super::push_dedented_lines;

/// Lines indented by four or more spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeRule;

impl BlockRule for CodeRule {
    fn name(&self) -> &'static str {
        "code"
    }

    fn interrupts_paragraph(&self) -> bool {
        false
    }

    fn probe(&self, ctx: &ParseContext<'_>, line: usize, end: usize) -> bool {
        line < end && !ctx.is_blank(line) && ctx.lines().indent(line) >= CODE_INDENT
    }

    fn commit(
        &self,
        _lexer: &BlockLexer,
        ctx: &mut ParseContext<'_>,
        line: usize,
        end: usize,
    ) -> Result<bool, LexError> {
        if !self.probe(ctx, line, end) {
            return Ok(false);
        }

        // Blank lines belong to the block only if more code follows them
        let mut next = line + 1;
        let mut last = next;
        while next < end {
            if ctx.is_blank(next) {
                next += 1;
            } else if ctx.lines().indent(next) >= CODE_INDENT {
                next += 1;
                last = next;
            } else {
                break;
            }
        }

        let mut content = String::new();
        push_dedented_lines(ctx, line, last, CODE_INDENT, &mut content);
        ctx.push(Token::CodeBlock { content });
        ctx.set_cursor(last);
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

    fn code(content: &str) -> Token {
        Token::CodeBlock {
            content: content.to_string(),
        }
    }

    #[test]
    fn test_indented_code() {
        assert_eq!(lex("    a\n      b\n"), vec![code("a\n  b\n")]);
    }

    #[test]
    fn test_inner_blank_lines_kept() {
        assert_eq!(lex("    a\n\n    b"), vec![code("a\n\nb")]);
    }

    #[test]
    fn test_trailing_blank_lines_dropped() {
        let tokens = lex("    a\n\n\npara");
        assert_eq!(tokens[0], code("a\n"));
        assert_eq!(tokens[1], Token::ParagraphOpen);
    }

    #[test]
    fn test_does_not_interrupt_paragraph() {
        let tokens = lex("text\n    more");
        assert_eq!(
            tokens,
            vec![
                Token::ParagraphOpen,
                Token::Inline {
                    content: "text\nmore".to_string()
                },
                Token::ParagraphClose,
            ]
        );
    }
}
