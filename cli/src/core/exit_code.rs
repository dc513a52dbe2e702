use crate::core::error::HlError;

/// Process exit codes, following the usual Unix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    /// Invalid arguments or input
    ValidationError = 2,
    /// Missing or unreadable source
    FileError = 3,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(hl_error) = error.downcast_ref::<HlError>() {
            match hl_error {
                HlError::Io(_) => ExitCode::FileError,
                HlError::SourceNotFound(_) => ExitCode::FileError,
                HlError::Validation(_) => ExitCode::ValidationError,
                HlError::Generic(_) => ExitCode::GeneralError,
            }
        } else if error.downcast_ref::<std::io::Error>().is_some() {
            ExitCode::FileError
        } else {
            ExitCode::GeneralError
        }
    }
}
