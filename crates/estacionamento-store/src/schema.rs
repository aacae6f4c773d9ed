use sqlx::SqliteConnection;
use tracing::info;

use estacionamento_core::{Result, SCHEMA_DDL, TABLES};

use crate::utils::db_error;

/// Create every parking table that does not exist yet.
///
/// Safe to run repeatedly. Any failure is returned as-is; there is no
/// partial recovery.
pub async fn init_schema(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::raw_sql(SCHEMA_DDL)
        .execute(&mut *conn)
        .await
        .map_err(db_error)?;
    info!(event = "schema_initialized", tables = TABLES.len());
    Ok(())
}

/// Names of the user tables currently in the database, sorted.
pub async fn list_tables(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        "select name from sqlite_master where type = 'table' and name not like 'sqlite_%' order by name",
    )
    .fetch_all(&mut *conn)
    .await
    .map_err(db_error)
}

pub async fn table_exists(conn: &mut SqliteConnection, table: &str) -> Result<bool> {
    let count = sqlx::query_scalar::<_, i64>(
        "select count(*) from sqlite_master where type = 'table' and name = ?",
    )
    .bind(table)
    .fetch_one(&mut *conn)
    .await
    .map_err(db_error)?;
    Ok(count > 0)
}
