use std::fmt;
use std::io;

/// Error type for the console layer.
///
/// The index itself never fails: a missing key is an ordinary `None` or
/// `false`. Only the code that talks to a terminal produces these.
#[derive(Debug)]
pub enum Error {
    /// IO error while reading input or writing output.
    Io(io::Error),
    /// A blank contact name was entered.
    EmptyKey,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error: {e}"),
            Error::EmptyKey => write!(f, "Name cannot be empty."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::EmptyKey => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type alias used by the console.
pub type Result<T> = std::result::Result<T, Error>;
