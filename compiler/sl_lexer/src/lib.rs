//! Scanner for SimpleLang expressions.
//!
//! Converts source text into a pull-based stream of [`Token`]s. The crate is
//! standalone: the driver, highlighters, and a future parser can depend on it
//! without pulling in anything else.
//!
//! # Pipeline
//!
//! ```text
//! &str --> SourceBuffer --> Cursor --> Scanner --> Token<'src>
//!          (sentinel)       (bytes)    (classify)
//! ```
//!
//! Tokens borrow their text from the [`SourceBuffer`], so the borrow checker
//! guarantees no token outlives the buffer it was scanned from.
//!
//! # Example
//!
//! ```
//! use sl_lexer::{Scanner, SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::new("a, with: 3");
//! let mut scanner = Scanner::new(&buf);
//!
//! let tok = scanner.next_token();
//! assert!(tok.is(TokenKind::Ident));
//! assert_eq!(tok.text(), "a");
//! assert!(scanner.next_token().is(TokenKind::Comma));
//! assert!(scanner.next_token().is(TokenKind::KwWith));
//! ```

mod cursor;
mod error;
mod line_table;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use error::SourceError;
pub use line_table::{LineCol, LineTable};
pub use scanner::{tokenize, Scanner};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use token::{keyword, Token, TokenKind};
