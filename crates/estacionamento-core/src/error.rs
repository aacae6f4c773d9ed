use std::path::PathBuf;

use thiserror::Error;

/// Core error type shared across estacionamento crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Database error or driver failure.
    #[error("database error: {0}")]
    Db(String),
    /// A script or generated file could not be read or written.
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A statement of a SQL script failed; the load was aborted.
    #[error("script {path} failed at statement `{statement}`: {message}")]
    Script {
        path: String,
        statement: String,
        message: String,
    },
    /// A string does not follow the plate pattern.
    #[error("invalid plate: {0}")]
    InvalidPlate(String),
}

/// Convenience alias for results returned by estacionamento crates.
pub type Result<T> = std::result::Result<T, Error>;
