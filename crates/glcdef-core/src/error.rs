//! Error types for glcdef

use thiserror::Error;

/// glcdef error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for glcdef
pub type Result<T> = std::result::Result<T, Error>;
