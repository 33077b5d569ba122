//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::errors::BstError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Bst(#[from] BstError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Bst(e) => match e {
                BstError::InvalidValue { .. } => crate::exitcode::DATAERR,
                BstError::FileRead(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    crate::exitcode::NOINPUT
                }
                BstError::FileRead(_) => crate::exitcode::IOERR,
            },
        }
    }
}
