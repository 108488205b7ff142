//! Command-line configuration.
//!
//! ```text
//! simplelexer [options] [<input expression>]
//!
//!   -f, --file <path>   read the input from a file
//!       --positions     append `@ line:col` to every token
//!       --names         print kind names instead of numbers
//!   -h, --help          print usage
//!   -V, --version       print version
//! ```

use std::path::PathBuf;

use crate::DriverError;

pub const USAGE: &str = "\
simplelexer - a simple lexical analyzer

Usage: simplelexer [options] [<input expression>]

Options:
  -f, --file <path>   Read the input from a file
      --positions     Append '@ line:col' to every token
      --names         Print kind names instead of numbers
  -h, --help          Print this message
  -V, --version       Print version";

/// Where the source text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Positional expression. Empty when none was given.
    Inline(String),
    File(PathBuf),
}

/// How the kind column is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindFormat {
    /// Numeric discriminant, as the original tool printed it.
    #[default]
    Number,
    Name,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: Input,
    pub positions: bool,
    pub kind_format: KindFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: Input::Inline(String::new()),
            positions: false,
            kind_format: KindFormat::Number,
        }
    }
}

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Lex(Config),
    Help,
    Version,
}

impl Command {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Command, DriverError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut expr: Option<String> = None;
        let mut file: Option<PathBuf> = None;
        let mut only_positional = false;

        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = args.next() {
            if only_positional || !arg.starts_with('-') || arg == "-" {
                if expr.is_some() {
                    return Err(DriverError::Usage(format!(
                        "unexpected extra argument '{arg}'"
                    )));
                }
                expr = Some(arg);
                continue;
            }
            match arg.as_str() {
                "--" => only_positional = true,
                "-h" | "--help" => return Ok(Command::Help),
                "-V" | "--version" => return Ok(Command::Version),
                "--positions" => config.positions = true,
                "--names" => config.kind_format = KindFormat::Name,
                "-f" | "--file" => match args.next() {
                    Some(path) => file = Some(PathBuf::from(path)),
                    None => {
                        return Err(DriverError::Usage(format!("'{arg}' requires a path")));
                    }
                },
                _ => {
                    if let Some(path) = arg.strip_prefix("--file=") {
                        file = Some(PathBuf::from(path));
                    } else if looks_like_expression(&arg) {
                        // `-1+2` is an expression, not a flag.
                        if expr.is_some() {
                            return Err(DriverError::Usage(format!(
                                "unexpected extra argument '{arg}'"
                            )));
                        }
                        expr = Some(arg);
                    } else {
                        return Err(DriverError::Usage(format!("unknown option '{arg}'")));
                    }
                }
            }
        }

        config.input = match (file, expr) {
            (Some(_), Some(_)) => {
                return Err(DriverError::Usage(
                    "give either an expression or --file, not both".to_string(),
                ));
            }
            (Some(path), None) => Input::File(path),
            (None, expr) => Input::Inline(expr.unwrap_or_default()),
        };
        Ok(Command::Lex(config))
    }
}

/// A leading `-` followed by something other than a letter.
fn looks_like_expression(arg: &str) -> bool {
    arg.as_bytes()
        .get(1)
        .is_some_and(|b| !b.is_ascii_alphabetic() && *b != b'-')
}
