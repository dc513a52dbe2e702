use std::fmt;
use std::io;

#[derive(Debug)]
pub enum HlError {
    Io(io::Error),
    SourceNotFound(String),
    Validation(String),
    Generic(String),
}

impl fmt::Display for HlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HlError::Io(err) => write!(f, "IO error: {err}"),
            HlError::SourceNotFound(path) => write!(
                f,
                "Source not found: {}",
                crate::core::paths::clean_path_str(path)
            ),
            HlError::Validation(msg) => write!(f, "Validation error: {msg}"),
            HlError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for HlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HlError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for HlError {
    fn from(err: io::Error) -> Self {
        HlError::Io(err)
    }
}

impl From<String> for HlError {
    fn from(msg: String) -> Self {
        HlError::Generic(msg)
    }
}

impl From<&str> for HlError {
    fn from(msg: &str) -> Self {
        HlError::Generic(msg.to_string())
    }
}
