//! Core contracts and helpers for the estacionamento seeding workspace.
//!
//! This crate defines the parking domain rows, the plate format, the literal
//! catalogs used for seeding, and the DDL shared by the store and the CLI.

pub mod catalog;
pub mod error;
pub mod model;
pub mod plate;
pub mod schema;

pub use error::{Error, Result};
pub use model::{NewLot, NewModel, NewTicketType, NewVehicle, TicketFact};
pub use plate::Plate;
pub use schema::{SCHEMA_DDL, TABLES};

/// Format used for `ticket.data_hora` values.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
