//! Built-in block rules.

mod code;
mod fence;
mod heading;
mod list;
mod paragraph;
mod thematic_break;

pub use code::CodeRule;
pub use fence::FenceRule;
pub use heading::HeadingRule;
pub use list::ListRule;
pub use paragraph::ParagraphRule;
pub use thematic_break::ThematicBreakRule;

use super::ParseContext;

/// Strip up to `width` leading spaces from `line`.
#[inline]
pub(crate) fn dedent(line: &str, width: usize) -> &str {
    let spaces = line
        .bytes()
        .take(width)
        .take_while(|&b| b == b' ')
        .count();
    &line[spaces..]
}

/// Append lines `[first, last)` to `out`, each dedented by up to `width`
/// spaces. A line keeps its `\n` if the source has one after it.
pub(crate) fn push_dedented_lines(
    ctx: &ParseContext<'_>,
    first: usize,
    last: usize,
    width: usize,
    out: &mut String,
) {
    let src_len = ctx.src().len();
    for line in first..last {
        out.push_str(dedent(ctx.line_text(line), width));
        if ctx.lines().end(line) < src_len {
            out.push('\n');
        }
    }
}
