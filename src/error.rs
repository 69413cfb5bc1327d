// std imports
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

// ---

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("the text string cannot contain wildcard characters, found {ch:?} at position {position}")]
    WildcardInText { ch: char, position: usize },
    #[error("invalid {what}: {source}")]
    Rejected {
        what: &'static str,
        #[source]
        source: wildcard::Rejected,
    },
    #[error("{what} is {len} bytes long, which exceeds the limit of {limit} bytes")]
    InputTooLong {
        what: &'static str,
        len: usize,
        limit: usize,
    },
    #[error("no {what} provided, input ended")]
    UnexpectedEof { what: &'static str },
    #[error("solvers disagree: {details}")]
    Disagreement { details: String },
}

impl Error {
    /// Writes a human readable report of the error to stderr.
    pub fn log(&self, use_colors: bool) {
        if let Err(e) = self.log_to(&mut io::stderr().lock(), use_colors) {
            log::error!("failed to report error {:?}: {}", self, e);
        }
    }

    pub fn log_to<W: Write>(&self, target: &mut W, use_colors: bool) -> io::Result<()> {
        let prefix = "error:";
        let prefix = if use_colors {
            prefix.bright_red().bold().to_string()
        } else {
            prefix.to_string()
        };

        match self {
            // one line per issue, the joined message is hard to read
            Self::Rejected { what, source } => {
                writeln!(target, "{} invalid {}", prefix, what)?;
                for issue in &source.issues {
                    writeln!(target, "  - {}", issue)?;
                }
                Ok(())
            }
            _ => writeln!(target, "{} {}", prefix, self),
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
