//! Bullet and ordered lists.
//!
//! Each item is lexed recursively: its lines are dedented by the item's
//! content column, the rest of the document is appended unchanged, and
//! the result is handed to the dispatcher through a cloned context. The
//! nested pass reports how many lines it consumed and whether its
//! content was loose.
//!
//! Looseness is only taken from blank lines *inside* an item. A blank
//! line between two sibling items does not make the list loose.

use crate::limits::{CODE_INDENT, MAX_LIST_MARKER_DIGITS, MAX_LIST_PADDING};
use crate::scanner::Scanner;
use crate::LexError;

use super::super::context::ListHandle;
use super::super::token::{ListKind, Token};
use super::super::{BlockLexer, BlockRule, ParseContext};
use super::dedent;

/// Recognizes a run of list items sharing one marker kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRule;

/// Match `[-+*]` followed by a space or end of line.
///
/// Returns the offset just past the marker.
fn skip_bullet_marker(ctx: &ParseContext<'_>, line: usize) -> Option<usize> {
    let lines = ctx.lines();
    if lines.indent(line) > 3 {
        return None;
    }

    let mut scanner = Scanner::new(
        ctx.src().as_bytes(),
        lines.content_start(line),
        lines.end(line),
    );
    if !matches!(scanner.peek(), Some(b'*' | b'-' | b'+')) {
        return None;
    }
    scanner.bump();

    // "-test" is not a list item
    if !scanner.is_eol() && !scanner.at(b' ') {
        return None;
    }

    Some(scanner.offset())
}

/// Match `\d+[.)]` followed by a space or end of line.
///
/// Returns the offset just past the delimiter and the marker's value.
fn skip_ordered_marker(ctx: &ParseContext<'_>, line: usize) -> Option<(usize, u32)> {
    let lines = ctx.lines();
    if lines.indent(line) >= CODE_INDENT {
        return None;
    }

    let digits_start = lines.content_start(line);
    let mut scanner = Scanner::new(ctx.src().as_bytes(), digits_start, lines.end(line));
    let digits = scanner.skip_while(|b| b.is_ascii_digit());
    if digits == 0 || digits > MAX_LIST_MARKER_DIGITS {
        return None;
    }

    if !scanner.eat(b'.') && !scanner.eat(b')') {
        return None;
    }

    // "1.test" is not a list item
    if !scanner.is_eol() && !scanner.at(b' ') {
        return None;
    }

    let value = ctx.src()[digits_start..digits_start + digits].parse().ok()?;
    Some((scanner.offset(), value))
}

/// Detect a list marker on `line`: its kind and the offset after it.
fn list_marker(ctx: &ParseContext<'_>, line: usize) -> Option<(ListKind, usize)> {
    if line >= ctx.line_count() {
        return None;
    }
    if let Some((after_marker, start)) = skip_ordered_marker(ctx, line) {
        return Some((ListKind::Ordered { start }, after_marker));
    }
    skip_bullet_marker(ctx, line).map(|after_marker| (ListKind::Bullet, after_marker))
}

/// Lines and columns of one list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ItemSpan {
    /// Line holding the marker.
    first: usize,
    /// Last line that belongs to the item (never a blank line).
    last: usize,
    /// Byte offset where content starts on the marker line.
    content_start: usize,
    /// Column from which continuation lines belong to the item.
    indent: usize,
}

impl ItemSpan {
    fn scan(ctx: &ParseContext<'_>, line: usize, after_marker: usize, end: usize) -> Self {
        let lines = ctx.lines();
        let line_end = lines.end(line);

        let mut scanner = Scanner::new(ctx.src().as_bytes(), after_marker, line_end);
        let padding = scanner.skip_spaces();

        // "-    \n  foo": empty first line, content column is one past the marker.
        // "-      code": a wide gap means the item opens with indented code.
        let (content_start, padding) = if scanner.is_eol() {
            (line_end, 1)
        } else if padding > MAX_LIST_PADDING {
            (after_marker + 1, 1)
        } else {
            (after_marker + padding, padding.max(1))
        };
        let indent = after_marker - lines.start(line) + padding;

        let mut last = line;
        let mut next = line + 1;
        while next < end {
            if ctx.is_blank(next) {
                next += 1;
                continue;
            }
            if lines.indent(next) < indent {
                break;
            }
            last = next;
            next += 1;
        }

        Self {
            first: line,
            last,
            content_start,
            indent,
        }
    }

    fn line_count(&self) -> usize {
        self.last - self.first + 1
    }

    /// Item lines with `indent` columns removed, followed by the rest of
    /// the document so the nested pass can look past the item.
    fn nested_text(&self, ctx: &ParseContext<'_>) -> String {
        let src = ctx.src();
        let lines = ctx.lines();
        let tail = &src[lines.end(self.last)..];

        let mut text = String::with_capacity(src.len() - self.content_start);
        text.push_str(&src[self.content_start..lines.end(self.first)]);
        for line in self.first + 1..=self.last {
            text.push('\n');
            text.push_str(dedent(ctx.line_text(line), self.indent));
        }
        text.push_str(tail);
        text
    }
}

/// Lex one item's content in a cloned context and return the absolute
/// line after it.
fn lex_item(
    lexer: &BlockLexer,
    ctx: &mut ParseContext<'_>,
    item: &ItemSpan,
    list: ListHandle,
) -> Result<usize, LexError> {
    let item_lines = item.line_count();
    let mut nested = ctx.clone_for(item.nested_text(ctx))?;
    lexer.tokenize(&mut nested, 0, item_lines)?;

    // The nested pass never reads past the item's own lines, so the item
    // always consumes exactly its span. An empty last item indexes no
    // lines at all and still takes its marker line.
    debug_assert!(nested.cursor() <= item_lines);
    if !nested.is_tight() {
        ctx.mark_loose(list);
    }
    ctx.append_tokens(nested);

    Ok(item.first + item_lines)
}

impl BlockRule for ListRule {
    fn name(&self) -> &'static str {
        "list"
    }

    fn probe(&self, ctx: &ParseContext<'_>, line: usize, _end: usize) -> bool {
        list_marker(ctx, line).is_some()
    }

    fn commit(
        &self,
        lexer: &BlockLexer,
        ctx: &mut ParseContext<'_>,
        start: usize,
        end: usize,
    ) -> Result<bool, LexError> {
        let Some((kind, _)) = list_marker(ctx, start) else {
            return Ok(false);
        };

        let list = ctx.open_list(kind);
        let mut line = start;

        while line < end {
            // Any bullet character continues a bullet list
            let Some((item_kind, after_marker)) = list_marker(ctx, line) else {
                break;
            };
            if item_kind.is_ordered() != kind.is_ordered() {
                break;
            }

            let item = ItemSpan::scan(ctx, line, after_marker, end);
            ctx.push(Token::ListItemOpen);
            line = lex_item(lexer, ctx, &item, list)?;
            ctx.push(Token::ListItemClose);

            if line >= end {
                break;
            }
            // Two blank lines end the list
            if ctx.is_blank(line) {
                line += 1;
                if line >= end || ctx.is_blank(line) {
                    break;
                }
            }
        }

        ctx.push(kind.close_token());
        ctx.set_cursor(line);
        Ok(true)
    }
}
