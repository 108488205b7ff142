//! Token printing loop.
//!
//! Output format, one token per line, follows the original `simplelexer`:
//!
//! ```text
//! Input: "a+1"
//! token type: 2, token text: "a"
//! token type: 6, token text: "+"
//! token type: 3, token text: "1"
//! simplelexer version 0.1.0
//! ```
//!
//! Both the input line and token text are printed with Rust's debug escapes
//! (`\"`, `\n`, `\0`), so every quoted field stays on one line and parses
//! back unambiguously.

use std::borrow::Cow;
use std::fs;
use std::io::Write;

use sl_lexer::{EncodingIssueKind, LineTable, Scanner, SourceBuffer, Token, TokenKind};

use crate::config::{Config, Input, KindFormat};
use crate::DriverError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Counts reported after a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Tokens printed (`Eof` excluded).
    pub tokens: usize,
    pub unknown: usize,
}

/// Scan the configured input and print every token to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<Summary, DriverError> {
    let source: Cow<'_, str> = match &config.input {
        Input::Inline(expr) => {
            writeln!(out, "Input: \"{}\"", expr.escape_debug())?;
            Cow::Borrowed(expr.as_str())
        }
        Input::File(path) => {
            let text = fs::read_to_string(path).map_err(|source| DriverError::Read {
                path: path.clone(),
                source,
            })?;
            writeln!(
                out,
                "Input file: \"{}\"",
                path.display().to_string().escape_debug()
            )?;
            Cow::Owned(text)
        }
    };
    tracing::debug!(len = source.len(), "scanning input");

    let buf = SourceBuffer::try_new(&source)?;
    let lines = config.positions.then(|| LineTable::build(&buf));
    for issue in buf.encoding_issues() {
        let what = match issue.kind {
            EncodingIssueKind::Utf8Bom => "byte order mark",
            EncodingIssueKind::InteriorNull => "NUL byte",
        };
        tracing::warn!(pos = issue.pos, "{what} in input");
    }

    let mut summary = Summary::default();
    let mut scanner = Scanner::new(&buf);
    loop {
        let tok = scanner.next_token();
        if tok.is_eof() {
            break;
        }
        summary.tokens += 1;
        if tok.is(TokenKind::Unknown) {
            summary.unknown += 1;
        }
        write_token(out, &tok, config.kind_format, lines.as_ref())?;
    }

    writeln!(out, "simplelexer version {VERSION}")?;
    tracing::info!(
        tokens = summary.tokens,
        unknown = summary.unknown,
        "scan complete"
    );
    Ok(summary)
}

fn write_token(
    out: &mut impl Write,
    tok: &Token<'_>,
    format: KindFormat,
    lines: Option<&LineTable<'_>>,
) -> std::io::Result<()> {
    match format {
        KindFormat::Number => write!(out, "token type: {}", tok.kind() as u8)?,
        KindFormat::Name => write!(out, "token type: {}", tok.kind())?,
    }
    write!(out, ", token text: \"{}\"", tok.text().escape_debug())?;
    if let Some(lines) = lines {
        write!(out, " @ {}", lines.locate(tok))?;
    }
    writeln!(out)
}
