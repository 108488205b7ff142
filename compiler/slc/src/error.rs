//! Driver errors.

use std::io;
use std::path::PathBuf;

use sl_lexer::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    /// Bad command line. The binary exits with status 2.
    #[error("{0}")]
    Usage(String),

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}

impl DriverError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Usage(_) => 2,
            DriverError::Read { .. } | DriverError::Source(_) | DriverError::Write(_) => 1,
        }
    }
}
