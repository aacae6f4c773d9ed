//! SQLite access for the estacionamento workspace.
//!
//! Everything here runs on a single `SqliteConnection`; callers own it and
//! pass `&mut` borrows (or a transaction) into each operation.

pub mod audit;
pub mod connection;
pub mod queries;
pub mod schema;
pub mod script;
mod utils;

pub use audit::{StoreAudit, audit_store};
pub use connection::{DEFAULT_DATABASE_URL, connect};
pub use queries::VehicleInsert;
pub use schema::{init_schema, list_tables, table_exists};
pub use script::{ScriptReport, execute_script, load_script, split_statements};

pub use sqlx::SqliteConnection;
