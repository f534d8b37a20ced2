use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("file \"{}\" {reason}", path.display())]
    InvalidFile { path: PathBuf, reason: String },
    #[error("not enough vertices: requesting {requested} out of {available} available")]
    NotEnoughItems { requested: usize, available: usize },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("solver failed: {0}")]
    Solver(String),
    #[error("cut loop stalled: {0}")]
    Stalled(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn solver(message: impl Into<String>) -> Self {
        Self::Solver(message.into())
    }

    pub fn stalled(message: impl Into<String>) -> Self {
        Self::Stalled(message.into())
    }

    pub(crate) fn empty_or_missing(path: impl Into<PathBuf>) -> Self {
        Self::InvalidFile {
            path: path.into(),
            reason: "is empty or missing".to_string(),
        }
    }

    pub(crate) fn invalid_data(path: impl Into<PathBuf>, line: usize) -> Self {
        Self::InvalidFile {
            path: path.into(),
            reason: format!("contains invalid data at line {line}"),
        }
    }
}
