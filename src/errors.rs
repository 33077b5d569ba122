use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BstError {
    #[error("Invalid integer value: {input}")]
    InvalidValue {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Failed to read values file: {0}")]
    FileRead(#[from] std::io::Error),
}

pub type BstResult<T> = Result<T, BstError>;
