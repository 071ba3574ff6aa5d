//! Error types for tallying tournament files

use std::path::PathBuf;
use thiserror::Error;

use crate::record::RecordError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
