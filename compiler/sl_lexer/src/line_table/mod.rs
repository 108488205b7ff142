//! Byte offset to line/column lookup.
//!
//! Tokens carry only a byte offset. Consumers that need to point at a
//! location (an unknown character, say) build a [`LineTable`] once per source
//! and resolve offsets with a binary search over line starts.

use std::fmt;

use crate::{SourceBuffer, Token};

/// 1-based line and column. The column counts characters, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Byte offset of every line start in a source.
///
/// ```
/// use sl_lexer::{LineCol, LineTable, SourceBuffer};
///
/// let buf = SourceBuffer::new("a\nbc");
/// let table = LineTable::build(&buf);
/// assert_eq!(table.line_col(3), LineCol { line: 2, col: 2 });
/// ```
#[derive(Clone, Debug)]
pub struct LineTable<'src> {
    source: &'src str,
    /// `starts[0] == 0`; `starts[i]` is the byte after the `i`-th `\n`.
    starts: Vec<u32>,
}

impl<'src> LineTable<'src> {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "SourceBuffer length fits in u32"
    )]
    pub fn build(buf: &'src SourceBuffer) -> Self {
        let source = buf.as_str();
        let mut starts = vec![0u32];
        starts.extend(memchr::memchr_iter(b'\n', source.as_bytes()).map(|i| i as u32 + 1));
        Self { source, starts }
    }

    /// 1-based line containing `offset`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by source length, which fits in u32"
    )]
    pub fn line(&self, offset: u32) -> u32 {
        let idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert - 1,
        };
        idx as u32 + 1
    }

    /// Resolve a byte offset. Offsets past the end clamp to the end.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "column is bounded by source length, which fits in u32"
    )]
    pub fn line_col(&self, offset: u32) -> LineCol {
        let offset = offset.min(self.source_len());
        let line = self.line(offset);
        let start = self.starts[(line - 1) as usize] as usize;
        let col = self.source[start..offset as usize].chars().count() as u32 + 1;
        LineCol { line, col }
    }

    /// Location of a token's first character.
    pub fn locate(&self, token: &Token<'_>) -> LineCol {
        self.line_col(token.offset())
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "SourceBuffer length fits in u32"
    )]
    fn source_len(&self) -> u32 {
        self.source.len() as u32
    }
}
