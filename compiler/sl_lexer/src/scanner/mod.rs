//! Hand-written scanner producing borrowed [`Token`]s.
//!
//! Each call to [`Scanner::next_token`] skips whitespace and classifies the
//! byte under the cursor:
//!
//! 1. sentinel at end of input -> `Eof` (repeated forever, no advance)
//! 2. ASCII letter -> maximal letter run, `KwWith` for `with`, else `Ident`
//! 3. ASCII digit -> maximal digit run, `Number`
//! 4. one of `+ - * / ( ) : ,` -> the matching punctuation kind
//! 5. anything else -> one character, `Unknown`
//!
//! Only the cursor position survives between calls. Every call that is not
//! already at end of input advances by at least one byte.

use crate::cursor::Cursor;
use crate::token::{keyword, Token, TokenKind};
use crate::SourceBuffer;

/// Pull-based tokenizer over a [`SourceBuffer`].
///
/// Requires `&mut self` to advance, so one instance cannot be driven from
/// two places at once; scan independent buffers with independent scanners.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned at the start of `buf`.
    pub fn new(buf: &'src SourceBuffer) -> Self {
        Self::from_cursor(buf.cursor())
    }

    pub fn from_cursor(cursor: Cursor<'src>) -> Self {
        Self { cursor }
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` with empty text once the source is exhausted, and keeps
    /// returning it on every later call.
    pub fn next_token(&mut self) -> Token<'src> {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        let tok = match self.cursor.current() {
            0 if self.cursor.is_eof() => Token::new(TokenKind::Eof, "", start),
            b'a'..=b'z' | b'A'..=b'Z' => self.word(start),
            b'0'..=b'9' => self.number(start),
            b => match TokenKind::from_punct(b) {
                Some(kind) => self.single(start, kind),
                None => self.unknown(start),
            },
        };
        tracing::trace!(kind = %tok.kind(), offset = tok.offset(), len = tok.len(), "token");
        tok
    }

    /// Current byte offset in the source.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Returns `true` once only whitespace (or nothing) remains.
    pub fn is_done(&self) -> bool {
        let mut probe = self.cursor;
        probe.eat_whitespace();
        probe.is_eof()
    }

    fn word(&mut self, start: u32) -> Token<'src> {
        self.cursor.eat_while(|b| b.is_ascii_alphabetic());
        let text = self.cursor.slice_from(start);
        let kind = keyword(text).unwrap_or(TokenKind::Ident);
        Token::new(kind, text, start)
    }

    fn number(&mut self, start: u32) -> Token<'src> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        Token::new(TokenKind::Number, self.cursor.slice_from(start), start)
    }

    fn single(&mut self, start: u32, kind: TokenKind) -> Token<'src> {
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start), start)
    }

    /// One full character, so the text stays valid UTF-8. Covers interior
    /// NUL bytes, which are not the end of input.
    fn unknown(&mut self, start: u32) -> Token<'src> {
        self.cursor.advance_char();
        Token::new(TokenKind::Unknown, self.cursor.slice_from(start), start)
    }
}

/// Yields every token before `Eof`, then `None` forever.
impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Scan all of `buf`, including the trailing `Eof` token.
pub fn tokenize(buf: &SourceBuffer) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(buf);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        tokens.push(tok);
        if tok.is_eof() {
            return tokens;
        }
    }
}
