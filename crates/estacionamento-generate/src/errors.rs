use thiserror::Error;

/// Errors emitted by the seed and fact generators.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Store(#[from] estacionamento_core::Error),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no rows in parent table '{0}'")]
    NoParentRows(&'static str),
    #[error("vehicle slot {slot}: plate still colliding after {attempts} attempts")]
    PlateRetriesExhausted { slot: u64, attempts: u32 },
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}
