//! Flat-file SQL script execution.
//!
//! Scripts are split on every `;`. A `;` inside a string literal breaks the
//! statement in two; inputs are expected not to contain one. This matches
//! the reference geography scripts and the generated fact script.

use std::path::Path;

use serde::Serialize;
use sqlx::SqliteConnection;
use tracing::{error, info, warn};

use estacionamento_core::{Error, Result};

use crate::utils::database_message;

/// Summary of a script execution.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptReport {
    pub source: String,
    pub statements: usize,
}

/// Split a script into its non-blank statements, trimmed.
pub fn split_statements(text: &str) -> Vec<&str> {
    text.split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .collect()
}

/// True when a database message reports an INSERT whose value count does
/// not match its column list.
pub fn is_column_count_mismatch(message: &str) -> bool {
    message.contains("values for") && message.contains("columns")
}

/// Read `path` and execute its statements in order, autocommitting each.
///
/// The first failing statement aborts the load.
pub async fn load_script(conn: &mut SqliteConnection, path: &Path) -> Result<ScriptReport> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    execute_script(conn, &path.display().to_string(), &text).await
}

/// Execute an in-memory script. `source` labels logs and errors.
pub async fn execute_script(
    conn: &mut SqliteConnection,
    source: &str,
    text: &str,
) -> Result<ScriptReport> {
    info!(event = "script_started", source = %source);

    let mut statements = 0;
    for statement in split_statements(text) {
        let sql = format!("{statement};");
        if let Err(err) = sqlx::raw_sql(&sql).execute(&mut *conn).await {
            let message = database_message(&err);
            error!(
                event = "script_statement_failed",
                source = %source,
                statement = %statement,
                error = %message
            );
            if is_column_count_mismatch(&message) {
                warn!(
                    event = "script_hint",
                    source = %source,
                    "the number of values in the INSERT does not match the number of listed columns"
                );
            }
            return Err(Error::Script {
                path: source.to_string(),
                statement: statement.to_string(),
                message,
            });
        }
        statements += 1;
    }

    info!(event = "script_finished", source = %source, statements);
    Ok(ScriptReport {
        source: source.to_string(),
        statements,
    })
}
