//! Errors raised while preparing source text for scanning.
//!
//! Scanning itself never fails: unrecognized input becomes
//! [`TokenKind::Unknown`](crate::TokenKind::Unknown). The only fallible step is
//! building the [`SourceBuffer`](crate::SourceBuffer), whose byte offsets are
//! `u32`.

use thiserror::Error;

/// Failure to construct a [`SourceBuffer`](crate::SourceBuffer).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Source (plus sentinel and padding) does not fit in `u32` offsets.
    #[error("source is {len} bytes, exceeding the maximum of {max} bytes")]
    TooLarge { len: usize, max: usize },
}
