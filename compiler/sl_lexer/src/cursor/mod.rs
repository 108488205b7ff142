//! Byte cursor over a sentinel-terminated buffer.
//!
//! End of input is the sentinel (`0x00`) at a position at or past the source
//! length. A NUL byte before that position is ordinary (unknown) input.

/// Cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so saving a position is a plain assignment.
///
/// # Invariant
///
/// `buf.as_bytes()[source_len] == 0` and every byte after it is `0`. This is
/// guaranteed by `SourceBuffer` construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source + sentinel + padding. Retained whole so tokens and diagnostics
    /// can slice any part of it.
    buf: &'a str,
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(
            buf.as_bytes()[source_len as usize] == 0,
            "sentinel byte must be 0x00"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position; `0` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.as_bytes()[self.pos as usize]
    }

    /// Byte one position ahead; `0` at or past the last source byte.
    #[inline]
    pub fn peek(&self) -> u8 {
        if self.pos + 1 >= self.source_len {
            return 0;
        }
        self.buf.as_bytes()[self.pos as usize + 1]
    }

    /// Advance one byte. A no-op at end of input, so the cursor never
    /// leaves the sentinel.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract `start..end` of the source.
    ///
    /// # Contract
    ///
    /// `start <= end <= source_len`, both on character boundaries. The
    /// scanner only produces such ranges.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Extract the source from `start` up to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must be `false`, so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past a run of whitespace (the C `isspace` set).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_space);
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character. A no-op at end of input.
    #[inline]
    pub fn advance_char(&mut self) {
        if self.pos < self.source_len {
            let width = Self::utf8_char_width(self.current());
            self.pos = (self.pos + width).min(self.source_len);
        }
    }
}

/// Space, tab, newline, vertical tab, form feed, carriage return.
#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
