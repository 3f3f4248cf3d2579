//! Thematic breaks (`---`, `***`, `___`).

use crate::limits::CODE_INDENT;
use crate::scanner::Scanner;
use crate::LexError;

use super::super::token::Token;
use super::super::{BlockLexer, BlockRule, ParseContext};

/// Three or more `-`, `*` or `_`, optionally separated by spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThematicBreakRule;

fn is_thematic_break(ctx: &ParseContext<'_>, line: usize) -> bool {
    let lines = ctx.lines();
    if line >= lines.len() || lines.indent(line) >= CODE_INDENT {
        return false;
    }

    let mut scanner = Scanner::new(
        ctx.src().as_bytes(),
        lines.content_start(line),
        lines.end(line),
    );

    // Must start with -, *, or _
    let marker = match scanner.peek() {
        Some(b @ (b'-' | b'*' | b'_')) => b,
        _ => return false,
    };

    let mut count = 0;
    while let Some(b) = scanner.peek() {
        if b == marker {
            count += 1;
        } else if b != b' ' {
            return false;
        }
        scanner.bump();
    }

    count >= 3
}

impl BlockRule for ThematicBreakRule {
    fn name(&self) -> &'static str {
        "thematic_break"
    }

    fn probe(&self, ctx: &ParseContext<'_>, line: usize, _end: usize) -> bool {
        is_thematic_break(ctx, line)
    }

    fn commit(
        &self,
        _lexer: &BlockLexer,
        ctx: &mut ParseContext<'_>,
        line: usize,
        _end: usize,
    ) -> Result<bool, LexError> {
        if !is_thematic_break(ctx, line) {
            return Ok(false);
        }

        ctx.push(Token::ThematicBreak);
        ctx.set_cursor(line + 1);
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

    #[test]
    fn test_thematic_break_variants() {
        for input in ["---", "***", "___", "- - -", "----------", "   ---", "* * *  "] {
            assert_eq!(lex(input), vec![Token::ThematicBreak], "input: {input:?}");
        }
    }

    #[test]
    fn test_thematic_break_too_few() {
        assert_eq!(lex("__")[0], Token::ParagraphOpen);
    }

    #[test]
    fn test_thematic_break_mixed_invalid() {
        assert_eq!(lex("_*_")[0], Token::ParagraphOpen);
    }

    #[test]
    fn test_thematic_break_wins_over_list() {
        assert_eq!(lex("- - -\n- a")[0], Token::ThematicBreak);
    }

    #[test]
    fn test_thematic_break_closes_paragraph() {
        let tokens = lex("Text\n***");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2], Token::ParagraphClose);
        assert_eq!(tokens[3], Token::ThematicBreak);
    }
}
