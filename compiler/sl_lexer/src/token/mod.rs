//! Token kinds and the borrowed [`Token`] value produced by the scanner.
//!
//! `TokenKind` is a closed set. Discriminants are stable and are what the
//! `simplelexer` driver prints as the numeric "token type".

use std::fmt;
use std::ops::Range;

/// Classification of a single lexical unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// End of input. Text is always empty.
    Eof = 0,
    /// One character that matches no other category.
    Unknown = 1,
    /// Maximal run of ASCII letters other than a keyword.
    Ident = 2,
    /// Maximal run of ASCII digits. Value conversion is left to consumers.
    Number = 3,
    Comma = 4,
    Colon = 5,
    Plus = 6,
    Minus = 7,
    Star = 8,
    Slash = 9,
    LeftParen = 10,
    RightParen = 11,
    /// The reserved word `with`.
    KwWith = 12,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Eof,
        TokenKind::Unknown,
        TokenKind::Ident,
        TokenKind::Number,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::KwWith,
    ];

    /// Map a single punctuation byte to its kind.
    #[inline]
    pub const fn from_punct(byte: u8) -> Option<TokenKind> {
        match byte {
            b'+' => Some(TokenKind::Plus),
            b'-' => Some(TokenKind::Minus),
            b'*' => Some(TokenKind::Star),
            b'/' => Some(TokenKind::Slash),
            b'(' => Some(TokenKind::LeftParen),
            b')' => Some(TokenKind::RightParen),
            b':' => Some(TokenKind::Colon),
            b',' => Some(TokenKind::Comma),
            _ => None,
        }
    }

    /// Fixed source text for kinds that always spell the same way.
    ///
    /// Returns `None` for kinds whose text varies (`Ident`, `Number`,
    /// `Unknown`) and for `Eof`.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Comma => Some(","),
            TokenKind::Colon => Some(":"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::KwWith => Some("with"),
            TokenKind::Eof | TokenKind::Unknown | TokenKind::Ident | TokenKind::Number => None,
        }
    }

    /// Human-readable name, used by `Display` and the driver's `--names` mode.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Unknown => "unknown",
            TokenKind::Ident => "ident",
            TokenKind::Number => "number",
            TokenKind::Comma => "comma",
            TokenKind::Colon => "colon",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Star => "star",
            TokenKind::Slash => "slash",
            TokenKind::LeftParen => "l_paren",
            TokenKind::RightParen => "r_paren",
            TokenKind::KwWith => "kw_with",
        }
    }

    /// Returns `true` for the single-character punctuation kinds.
    pub const fn is_punct(self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Colon
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::LeftParen
                | TokenKind::RightParen
        )
    }

    /// Returns `true` for reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(self, TokenKind::KwWith)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a letter run to a keyword kind.
///
/// Exact, case-sensitive match. `with` is the only reserved word.
#[inline]
pub fn keyword(text: &str) -> Option<TokenKind> {
    match text {
        "with" => Some(TokenKind::KwWith),
        _ => None,
    }
}

/// One lexical unit borrowed from a [`SourceBuffer`](crate::SourceBuffer).
///
/// `text` is exactly the source characters that produced the token and is
/// empty for [`TokenKind::Eof`]. The `'src` lifetime ties the token to its
/// buffer, so a token cannot be kept after the buffer is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    kind: TokenKind,
    text: &'src str,
    offset: u32,
}

impl<'src> Token<'src> {
    /// Build a token in one step.
    #[inline]
    pub const fn new(kind: TokenKind, text: &'src str, offset: u32) -> Self {
        Token { kind, text, offset }
    }

    #[inline]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched source slice.
    #[inline]
    pub const fn text(&self) -> &'src str {
        self.text
    }

    /// Byte offset of the token's first character.
    ///
    /// For `Eof` this is the source length.
    #[inline]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Length of the matched text in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token text lies within a SourceBuffer, whose length fits in u32"
    )]
    #[inline]
    pub const fn len(&self) -> u32 {
        self.text.len() as u32
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte range of the token in the source.
    pub fn span(&self) -> Range<u32> {
        self.offset..self.offset + self.len()
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns `true` if the token's kind is any of `kinds`.
    ///
    /// Candidates are tested in order and the search stops at the first
    /// match. Repeats are allowed.
    #[inline]
    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|&kind| self.is(kind))
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.is(TokenKind::Eof)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({:?})", self.kind, self.text)
        }
    }
}

#[cfg(test)]
mod tests;
