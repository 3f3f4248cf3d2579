//! ATX headings (`# Title`).

use crate::limits::CODE_INDENT;
use crate::scanner::Scanner;
use crate::LexError;

use super::super::token::Token;
use super::super::{BlockLexer, BlockRule, ParseContext};

/// One to six `#` followed by a space or the end of the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingRule;

/// Heading level and content byte span.
fn parse_heading(ctx: &ParseContext<'_>, line: usize) -> Option<(u8, usize, usize)> {
    let lines = ctx.lines();
    if line >= lines.len() || lines.indent(line) >= CODE_INDENT {
        return None;
    }

    let bytes = ctx.src().as_bytes();
    let line_end = lines.end(line);
    let mut scanner = Scanner::new(bytes, lines.content_start(line), line_end);

    if !scanner.at(b'#') {
        return None;
    }

    let level = scanner.skip_run(b'#');
    if level > 6 {
        return None;
    }

    // Must be followed by space or end of line
    if !scanner.is_eol() && !scanner.at(b' ') {
        return None;
    }

    scanner.skip_spaces();
    let content_start = scanner.offset();
    let content_end = trim_heading_end(bytes, content_start, line_end);

    Some((level as u8, content_start, content_end))
}

/// Trim trailing spaces and an optional closing `#` sequence.
fn trim_heading_end(input: &[u8], start: usize, end: usize) -> usize {
    let mut pos = end;

    while pos > start && input[pos - 1] == b' ' {
        pos -= 1;
    }

    let after_hashes = pos;
    while pos > start && input[pos - 1] == b'#' {
        pos -= 1;
    }

    // Closing hashes must be preceded by a space (or be the whole content)
    if pos < after_hashes {
        if pos == start || input[pos - 1] == b' ' {
            while pos > start && input[pos - 1] == b' ' {
                pos -= 1;
            }
        } else {
            pos = after_hashes;
        }
    }

    pos
}

impl BlockRule for HeadingRule {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn probe(&self, ctx: &ParseContext<'_>, line: usize, _end: usize) -> bool {
        parse_heading(ctx, line).is_some()
    }

    fn commit(
        &self,
        _lexer: &BlockLexer,
        ctx: &mut ParseContext<'_>,
        line: usize,
        _end: usize,
    ) -> Result<bool, LexError> {
        let Some((level, start, end)) = parse_heading(ctx, line) else {
            return Ok(false);
        };

        let content = ctx.src()[start..end].to_owned();
        ctx.push(Token::Heading { level, content });
        ctx.set_cursor(line + 1);
        Ok(true)
    }
}
