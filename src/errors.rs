use std::io;

use thiserror::Error;

/// Startup failures while reading the filter argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Too many arguments.")]
    TooManyArguments,
    #[error("Filter is invalid: unknown code {0:?}")]
    InvalidCode(char),
}

/// Per-token failures. `Invalid` is reported inline and the session goes on.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Entered number \"{0}\" is invalid.")]
    Invalid(String),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
