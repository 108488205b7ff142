//! Sentinel-terminated source buffer.
//!
//! The buffer stores a copy of the source followed by a `0x00` sentinel, so
//! the cursor detects end of input by looking at the current byte instead of
//! comparing against a length on every step. The total size is rounded up to
//! a 64-byte boundary; the padding is also `0x00`.
//!
//! Construction also records encoding issues the scanner would otherwise
//! surface only as anonymous `Unknown` tokens: a leading UTF-8 BOM and
//! interior NUL bytes.

use crate::{Cursor, SourceError};

/// Cache line size in bytes, used for padding.
const CACHE_LINE: usize = 64;

/// Largest source accepted by [`SourceBuffer::try_new`].
///
/// Leaves room for the sentinel and padding while keeping every offset in
/// `u32`.
pub(crate) const MAX_SOURCE_LEN: usize = u32::MAX as usize - CACHE_LINE;

/// Sentinel-terminated copy of the source text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source..., '\0' sentinel, '\0' padding...]`. Kept as a `String` so
    /// slicing tokens out of it never needs an unchecked UTF-8 conversion.
    buf: String,
    source_len: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue found while building a [`SourceBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position of the offending sequence.
    pub pos: u32,
    /// Byte length of the offending sequence.
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 byte order mark (`EF BB BF`) at offset 0.
    Utf8Bom,
    /// NUL byte inside the source content. Scanned as `Unknown`.
    InteriorNull,
}

impl SourceBuffer {
    /// Build a buffer from source text.
    ///
    /// Sources longer than the `u32` offset range are truncated to the
    /// largest accepted length (on a character boundary). Use
    /// [`try_new`](Self::try_new) to reject them instead.
    pub fn new(source: &str) -> Self {
        match Self::try_new(source) {
            Ok(buf) => buf,
            Err(SourceError::TooLarge { .. }) => {
                let mut end = MAX_SOURCE_LEN;
                while !source.is_char_boundary(end) {
                    end -= 1;
                }
                tracing::debug!(
                    len = source.len(),
                    kept = end,
                    "source exceeds u32 offsets, truncating"
                );
                Self::build(&source[..end])
            }
        }
    }

    /// Build a buffer, failing if the source does not fit in `u32` offsets.
    pub fn try_new(source: &str) -> Result<Self, SourceError> {
        if source.len() > MAX_SOURCE_LEN {
            return Err(SourceError::TooLarge {
                len: source.len(),
                max: MAX_SOURCE_LEN,
            });
        }
        Ok(Self::build(source))
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "callers guarantee source.len() <= MAX_SOURCE_LEN"
    )]
    fn build(source: &str) -> Self {
        let source_len = source.len();

        // Round up to next 64-byte boundary, keeping at least one zero byte
        // after the sentinel.
        let padded_len = (source_len + 2 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(source);
        buf.extend(std::iter::repeat('\0').take(padded_len - source_len));

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(source.as_bytes(), &mut encoding_issues);
        for issue in &encoding_issues {
            tracing::debug!(kind = ?issue.kind, pos = issue.pos, "encoding issue in source");
        }

        Self {
            buf,
            source_len: source_len as u32,
            encoding_issues,
        }
    }

    /// The source text, without sentinel or padding.
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// The full buffer including sentinel and padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }

    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}
