//! Paragraphs, the fallback rule.

use crate::LexError;

use super::super::token::Token;
use super::super::{BlockLexer, BlockRule, ParseContext};

/// Takes any non-blank line and the lines after it, up to a blank line
/// or a line that starts another block.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphRule;

impl BlockRule for ParagraphRule {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn interrupts_paragraph(&self) -> bool {
        false
    }

    fn probe(&self, ctx: &ParseContext<'_>, line: usize, end: usize) -> bool {
        line < end && !ctx.is_blank(line)
    }

    fn commit(
        &self,
        lexer: &BlockLexer,
        ctx: &mut ParseContext<'_>,
        line: usize,
        end: usize,
    ) -> Result<bool, LexError> {
        if !self.probe(ctx, line, end) {
            return Ok(false);
        }

        let mut next = line + 1;
        while next < end && !ctx.is_blank(next) && !lexer.interrupts_paragraph(ctx, next, end) {
            next += 1;
        }

        let mut content = String::new();
        for l in line..next {
            if l > line {
                content.push('\n');
            }
            content.push_str(ctx.line_text(l).trim_start_matches(' '));
        }
        let content = content.trim().to_owned();

        ctx.push(Token::ParagraphOpen);
        ctx.push(Token::Inline { content });
        ctx.push(Token::ParagraphClose);
        ctx.set_cursor(next);
        Ok(true)
    }
}
