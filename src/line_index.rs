//! Per-line offset table.
//!
//! Block rules address the document by line number. The index records,
//! for every line, where it starts, where it ends (before the `\n`) and
//! how many leading spaces it has, so rules never rescan for line
//! boundaries.

use memchr::memchr_iter;

/// Line offsets and leading-space counts for one text buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<usize>,
    ends: Vec<usize>,
    indents: Vec<usize>,
}

impl LineIndex {
    /// Index every line of `text`.
    ///
    /// A trailing `\n` does not produce an extra empty line.
    ///
    /// # Example
    /// ```
    /// use ferroblock::LineIndex;
    ///
    /// let index = LineIndex::new("- a\n  b\n");
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.indent(1), 2);
    /// ```
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let estimate = bytes.len() / 32 + 1;
        let mut index = Self {
            starts: Vec::with_capacity(estimate),
            ends: Vec::with_capacity(estimate),
            indents: Vec::with_capacity(estimate),
        };

        let mut start = 0;
        for newline in memchr_iter(b'\n', bytes) {
            index.push_line(bytes, start, newline);
            start = newline + 1;
        }
        if start < bytes.len() {
            index.push_line(bytes, start, bytes.len());
        }

        index
    }

    fn push_line(&mut self, bytes: &[u8], start: usize, end: usize) {
        let indent = bytes[start..end].iter().take_while(|&&b| b == b' ').count();
        self.starts.push(start);
        self.ends.push(end);
        self.indents.push(indent);
    }

    /// Number of indexed lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Check if the buffer had no lines at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Byte offset of the first character of `line`.
    #[inline]
    pub fn start(&self, line: usize) -> usize {
        self.starts[line]
    }

    /// Byte offset just past the last character of `line`, excluding `\n`.
    #[inline]
    pub fn end(&self, line: usize) -> usize {
        self.ends[line]
    }

    /// Leading space count of `line`.
    #[inline]
    pub fn indent(&self, line: usize) -> usize {
        self.indents[line]
    }

    /// Byte offset of the first non-space character of `line`.
    #[inline]
    pub fn content_start(&self, line: usize) -> usize {
        self.starts[line] + self.indents[line]
    }

    /// Check if `line` holds nothing but spaces.
    ///
    /// Lines past the end of the index count as blank.
    #[inline]
    pub fn is_blank(&self, line: usize) -> bool {
        line >= self.len() || self.content_start(line) >= self.ends[line]
    }
}
