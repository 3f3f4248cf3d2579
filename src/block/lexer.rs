//! Rule dispatcher.

use crate::LexError;

use super::context::ParseContext;
use super::rules::{CodeRule, FenceRule, HeadingRule, ListRule, ParagraphRule, ThematicBreakRule};
use super::BlockRule;

/// Drives block rules over a line range.
pub struct BlockLexer {
    /// Rules in priority order.
    rules: Vec<Box<dyn BlockRule>>,
    /// Rule that takes any non-blank line nothing else matched.
    fallback: Box<dyn BlockRule>,
}

impl Default for BlockLexer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockLexer {
    /// Create a lexer with the built-in rule set.
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(CodeRule),
                Box::new(FenceRule),
                Box::new(ThematicBreakRule),
                Box::new(ListRule),
                Box::new(HeadingRule),
            ],
            fallback: Box::new(ParagraphRule),
        }
    }

    /// Add a rule after the built-in ones, ahead of the fallback.
    pub fn push_rule(&mut self, rule: Box<dyn BlockRule>) {
        self.rules.push(rule);
    }

    /// Rule names in the order they are tried.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .iter()
            .chain(std::iter::once(&self.fallback))
            .map(|rule| rule.name())
    }

    /// Lex lines `[start, end)` of `ctx`, appending tokens.
    ///
    /// Blank lines between blocks are skipped; a blank line followed by
    /// another block in the range marks the context loose. Returns
    /// whether the cursor advanced past `start`.
    pub fn tokenize(
        &self,
        ctx: &mut ParseContext<'_>,
        start: usize,
        end: usize,
    ) -> Result<bool, LexError> {
        let end = end.min(ctx.line_count());
        let mut line = start;
        let mut emitted = false;
        let mut blank_before = false;
        ctx.set_cursor(start);

        while line < end {
            if ctx.is_blank(line) {
                blank_before |= emitted;
                line += 1;
                ctx.set_cursor(line);
                continue;
            }

            if blank_before {
                ctx.set_loose();
            }

            ctx.set_cursor(line);
            let rule = self.commit_first(ctx, line, end)?;
            if ctx.cursor() <= line {
                debug_assert!(false, "rule `{rule}` did not advance past line {line}");
                ctx.set_cursor(line + 1);
            }
            log::trace!(
                "{rule} matched lines {line}..{} at depth {}",
                ctx.cursor(),
                ctx.depth()
            );

            // A list may step over one trailing blank line before it ends
            let next = ctx.cursor();
            blank_before = next > line + 1 && next < end && ctx.is_blank(next - 1);
            line = next;
            emitted = true;
        }

        Ok(ctx.cursor() > start)
    }

    /// Check whether any rule other than the fallback matches at `start`.
    ///
    /// Never mutates `ctx`.
    pub fn validate(&self, ctx: &ParseContext<'_>, start: usize, end: usize) -> bool {
        start < end.min(ctx.line_count())
            && !ctx.is_blank(start)
            && self.rules.iter().any(|rule| rule.probe(ctx, start, end))
    }

    /// Check whether `line` starts a block that ends an open paragraph.
    pub fn interrupts_paragraph(&self, ctx: &ParseContext<'_>, line: usize, end: usize) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.interrupts_paragraph() && rule.probe(ctx, line, end))
    }

    fn commit_first(
        &self,
        ctx: &mut ParseContext<'_>,
        line: usize,
        end: usize,
    ) -> Result<&'static str, LexError> {
        for rule in &self.rules {
            if rule.commit(self, ctx, line, end)? {
                return Ok(rule.name());
            }
        }
        self.fallback.commit(self, ctx, line, end)?;
        Ok(self.fallback.name())
    }
}
