use estacionamento_core::Error;

/// Map a driver error into the core error type.
pub fn db_error(err: sqlx::Error) -> Error {
    Error::Db(err.to_string())
}

/// Message reported by the database, without the driver prefix when available.
pub fn database_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db) => db.message().to_string(),
        other => other.to_string(),
    }
}
