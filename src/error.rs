use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SatchelError {
    #[error("config error: {0}")]
    Config(String),

    #[error("unrecognized path (no configured suffix matches): {0}")]
    UnrecognizedPath(String),

    #[error("path doesn't have expected prefix {prefix:?}: {path}")]
    PrefixMismatch { prefix: String, path: String },

    #[error("error loading {}: {message}", path.display())]
    Decrypt { path: PathBuf, message: String },

    #[error("error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid utf-8 in {}: {source}", path.display())]
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    #[error("failed uploading {name}: {message}")]
    Upload { name: String, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SatchelError>;
