//! SimpleLang driver.
//!
//! Builds a [`SourceBuffer`](sl_lexer::SourceBuffer) from the command line,
//! pulls tokens until end of input, and prints one line per token. The
//! `simplelexer` binary is a thin wrapper around [`driver::run`].

pub mod config;
pub mod driver;
pub mod error;
pub mod tracing_setup;

pub use config::{Command, Config, Input, KindFormat};
pub use driver::{run, Summary};
pub use error::DriverError;
