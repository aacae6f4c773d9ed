use std::str::FromStr;

use sqlx::ConnectOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use tracing::info;

use estacionamento_core::Result;

use crate::utils::db_error;

/// Database file used when no URL is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://empresa_estacionamento.db";

/// Open the single connection used by a run.
///
/// The file is created when missing and foreign keys are enforced, so a
/// dangling reference fails at insert time.
pub async fn connect(url: &str) -> Result<SqliteConnection> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(db_error)?
        .create_if_missing(true)
        .foreign_keys(true);

    let conn = options.connect().await.map_err(db_error)?;
    info!(event = "database_connected", url = %url);
    Ok(conn)
}
