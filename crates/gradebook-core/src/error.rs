use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a regular file: {0:?}")]
    NotAFile(PathBuf),

    #[error("Failed to read scores file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Console input closed before a scores file was chosen")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a single record line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("score {token:?} is not an integer: {source}")]
    InvalidScore {
        token: String,
        #[source]
        source: ParseIntError,
    },
}
