//! Error types for design-patterns.
//!
//! A single `thiserror`-derived enum shared by every crate in the workspace.

use thiserror::Error;

/// The top-level error type used throughout design-patterns.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error, e.g. a demo worker thread that panicked.
    #[error("{0}")]
    Runtime(String),

    /// Menu input that does not name a known choice.
    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),

    /// A fallible singleton constructor failed. Nothing was cached.
    #[error("construction failed: {0}")]
    Construction(String),

    /// Reading from or writing to the terminal failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Shorthand `Result` type used throughout design-patterns.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert_eq!(err, Error::Io("pipe closed".to_string()));
        assert_eq!(err.to_string(), "i/o error: pipe closed");
    }

    #[test]
    fn invalid_choice_message_quotes_input() {
        let err = Error::InvalidChoice("abc".to_string());
        assert_eq!(err.to_string(), "invalid choice: \"abc\"");
    }
}
