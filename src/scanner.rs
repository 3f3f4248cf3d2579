//! Bounded byte scanner for marker recognition within one line.

/// A cursor over `input[pos..end]`, usually a single line.
///
/// Offsets are absolute into `input`, so a rule can hand positions back
/// to the line index without translation.
///
/// # Example
/// ```
/// use ferroblock::scanner::Scanner;
///
/// let input = b"```rust\ncode";
/// let mut scanner = Scanner::new(input, 0, 7);
///
/// assert_eq!(scanner.skip_run(b'`'), 3);
/// assert_eq!(scanner.skip_spaces(), 0);
/// assert_eq!(scanner.offset(), 3);
/// ```
#[derive(Clone, Copy)]
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `input[pos..end]`.
    #[inline]
    pub fn new(input: &'a [u8], pos: usize, end: usize) -> Self {
        debug_assert!(pos <= end && end <= input.len());
        Self { input, pos, end }
    }

    /// Current absolute offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining before the end bound.
    #[inline]
    fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Check if the end bound is reached.
    #[inline]
    pub fn is_eol(&self) -> bool {
        self.pos >= self.end
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        if self.is_eol() {
            None
        } else {
            Some(self.input[self.pos])
        }
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eol());
        self.pos += 1;
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Consume a specific byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skip while predicate is true, returning the count skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.bump();
        }
        self.pos - start
    }

    /// Skip spaces only.
    #[inline]
    pub fn skip_spaces(&mut self) -> usize {
        self.skip_while(|b| b == b' ')
    }

    /// Skip a run of one byte value (a marker run).
    #[inline]
    pub fn skip_run(&mut self, marker: u8) -> usize {
        self.skip_while(|b| b == marker)
    }
}

impl std::fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("offset", &self.pos)
            .field("remaining", &self.remaining())
            .finish()
    }
}
