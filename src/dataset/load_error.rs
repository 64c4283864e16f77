use std::error::Error;
use std::fmt;

/// Why the dataset could not be loaded. Every variant is terminal for the
/// session; there is no retry.
#[derive(Debug)]
pub enum LoadError {
    Network(String),
    Status(u16),
    Io(String),
    JsonParse(String),
    UnexpectedShape(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "Network error: {msg}"),
            LoadError::Status(code) => write!(f, "Dataset request failed with HTTP {code}"),
            LoadError::Io(msg) => write!(f, "IO error: {msg}"),
            LoadError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            LoadError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for LoadError {}
